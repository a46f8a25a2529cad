use crate::models::Activity;

// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, [&'static str; 2]);

const SEED_ACTIVITIES: &[SeedRow] = &[
    (
        "Clube de Xadrez",
        "Aprenda estratégias e participe de torneios de xadrez",
        "Sextas, 15h30 - 17h",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Aula de Programação",
        "Aprenda fundamentos de programação e desenvolva projetos de software",
        "Terças e quintas, 15h30 - 16h30",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Educação Física",
        "Educação física e atividades esportivas",
        "Segundas, quartas e sextas, 14h - 15h",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    // Esportivas
    (
        "Futebol",
        "Treinos e partidas de futebol para todos os níveis",
        "Quartas e sextas, 16h - 17h30",
        22,
        ["lucas@mergington.edu", "mariana@mergington.edu"],
    ),
    (
        "Vôlei",
        "Aprenda técnicas e jogue partidas de vôlei",
        "Terças e quintas, 17h - 18h",
        14,
        ["rafael@mergington.edu", "beatriz@mergington.edu"],
    ),
    // Artísticas
    (
        "Teatro",
        "Expressão artística e ensaios para peças teatrais",
        "Segundas e quartas, 16h - 17h",
        18,
        ["ana@mergington.edu", "pedro@mergington.edu"],
    ),
    (
        "Artes Visuais",
        "Desenho, pintura e outras formas de arte visual",
        "Sextas, 14h - 15h30",
        15,
        ["carla@mergington.edu", "fernando@mergington.edu"],
    ),
    // Intelectuais
    (
        "Clube de Leitura",
        "Discussão de livros e incentivo à leitura",
        "Terças, 17h - 18h",
        10,
        ["juliana@mergington.edu", "gustavo@mergington.edu"],
    ),
    (
        "Olimpíada de Matemática",
        "Preparação para olimpíadas e desafios matemáticos",
        "Quartas, 15h - 16h",
        25,
        ["camila@mergington.edu", "rodrigo@mergington.edu"],
    ),
];

/// The catalog every fresh process starts with, in display order.
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(
            |(name, description, schedule, max_participants, participants)| Activity {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
        .collect()
}
