use thiserror::Error;
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::models::Catalog;

/// Why a signup or removal was refused. Display text is shown to students as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Atividade não encontrada")]
    ActivityNotFound { activity: String },

    #[error("Estudante já inscrito")]
    AlreadyEnrolled { activity: String, email: String },

    #[error("Participante não encontrado nesta atividade")]
    ParticipantNotFound { activity: String, email: String },
}

pub async fn list_activities(store: &ActivityStore) -> Catalog {
    store.snapshot().await
}

/// Appends `email` to the roster of `activity_name`.
///
/// Capacity is advisory: a signup that takes the roster past
/// `max_participants` still succeeds and is only logged.
pub async fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let outcome = store
        .update(activity_name, |activity| {
            if activity.is_enrolled(email) {
                return Err(ActivityError::AlreadyEnrolled {
                    activity: activity_name.to_string(),
                    email: email.to_string(),
                });
            }
            activity.participants.push(email.to_string());
            Ok((activity.participants.len(), activity.max_participants))
        })
        .await
        .ok_or_else(|| ActivityError::ActivityNotFound {
            activity: activity_name.to_string(),
        })?;

    let (enrolled, capacity) = outcome?;
    if enrolled > capacity as usize {
        warn!(
            activity = %activity_name,
            enrolled,
            capacity,
            "activity is over capacity"
        );
    }
    info!(activity = %activity_name, email = %email, "participant signed up");

    Ok(format!("{} inscrito(a) em {} com sucesso", email, activity_name))
}

pub async fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    store
        .update(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::ParticipantNotFound {
                    activity: activity_name.to_string(),
                    email: email.to_string(),
                });
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .await
        .ok_or_else(|| ActivityError::ActivityNotFound {
            activity: activity_name.to_string(),
        })??;

    info!(activity = %activity_name, email = %email, "participant removed");
    Ok("Participante removido com sucesso".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    const NEW: &str = "new@mergington.edu";

    async fn roster(store: &ActivityStore, name: &str) -> Vec<String> {
        store.get(name).await.unwrap().participants
    }

    #[tokio::test]
    async fn listing_twice_returns_the_same_catalog() {
        let store = ActivityStore::seeded();
        let first = list_activities(&store).await;
        let second = list_activities(&store).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn signup_appends_and_reports_email_and_activity() {
        let store = ActivityStore::seeded();

        let message = signup_for_activity(&store, "Futebol", NEW).await.unwrap();

        assert!(message.contains(NEW));
        assert!(message.contains("Futebol"));
        assert_eq!(
            roster(&store, "Futebol").await,
            vec!["lucas@mergington.edu", "mariana@mergington.edu", NEW]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_once_enrolled() {
        let store = ActivityStore::seeded();
        signup_for_activity(&store, "Futebol", NEW).await.unwrap();

        let err = signup_for_activity(&store, "Futebol", NEW).await.unwrap_err();

        assert!(matches!(err, ActivityError::AlreadyEnrolled { .. }));
        let futebol = roster(&store, "Futebol").await;
        assert_eq!(futebol.iter().filter(|p| *p == NEW).count(), 1);
    }

    #[tokio::test]
    async fn signup_then_remove_restores_roster() {
        let store = ActivityStore::seeded();
        let before = roster(&store, "Vôlei").await;

        signup_for_activity(&store, "Vôlei", NEW).await.unwrap();
        let message = remove_participant(&store, "Vôlei", NEW).await.unwrap();

        assert_eq!(message, "Participante removido com sucesso");
        assert_eq!(roster(&store, "Vôlei").await, before);
    }

    #[tokio::test]
    async fn unknown_activity_never_mutates() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store).await;

        let signup = signup_for_activity(&store, "Unknown", NEW).await;
        let removal = remove_participant(&store, "Unknown", "lucas@mergington.edu").await;

        assert_eq!(
            signup,
            Err(ActivityError::ActivityNotFound {
                activity: "Unknown".into()
            })
        );
        assert!(matches!(removal, Err(ActivityError::ActivityNotFound { .. })));
        assert_eq!(list_activities(&store).await, before);
    }

    #[tokio::test]
    async fn removing_absent_participant_leaves_roster_unchanged() {
        let store = ActivityStore::seeded();
        let before = roster(&store, "Teatro").await;

        let err = remove_participant(&store, "Teatro", NEW).await.unwrap_err();

        assert_eq!(err.to_string(), "Participante não encontrado nesta atividade");
        assert_eq!(roster(&store, "Teatro").await, before);
    }

    #[tokio::test]
    async fn activity_check_precedes_participant_check() {
        let store = ActivityStore::seeded();
        // lucas is enrolled in Futebol, but the activity name is wrong.
        let err = signup_for_activity(&store, "futebol", "lucas@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::ActivityNotFound { .. }));
    }

    #[tokio::test]
    async fn signup_past_capacity_still_succeeds() {
        let store = ActivityStore::new(vec![Activity {
            name: "Coral".into(),
            description: "Canto".into(),
            schedule: "Sextas".into(),
            max_participants: 1,
            participants: vec!["a@mergington.edu".into()],
        }]);

        signup_for_activity(&store, "Coral", "b@mergington.edu")
            .await
            .unwrap();

        let coral = store.get("Coral").await.unwrap();
        assert_eq!(coral.participants.len(), 2);
        assert!(coral.is_over_capacity());
    }

    #[tokio::test]
    async fn concurrent_signups_are_not_lost() {
        let store = ActivityStore::seeded();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let email = format!("student{}@mergington.edu", i);
                signup_for_activity(&store, "Clube de Leitura", &email).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(roster(&store, "Clube de Leitura").await.len(), 34);
    }

    #[tokio::test]
    async fn concurrent_duplicate_signups_land_once() {
        let store = ActivityStore::seeded();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                signup_for_activity(&store, "Teatro", NEW).await
            }));
        }

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }

        assert_eq!(ok, 1);
        let teatro = roster(&store, "Teatro").await;
        assert_eq!(teatro.iter().filter(|p| *p == NEW).count(), 1);
    }
}
