use medscore_core::models::answer::Answers;

use crate::scoring::{Breakdown, ScoreResult, UNKNOWN_CATEGORY};

struct AsaClass {
    category: &'static str,
    description: &'static str,
    mortality_rate: &'static str,
}

const CLASSES: [AsaClass; 6] = [
    AsaClass {
        category: "asa_1",
        description: "Здоровый пациент без системных заболеваний",
        mortality_rate: "0.1%",
    },
    AsaClass {
        category: "asa_2",
        description: "Легкое системное заболевание без функциональных ограничений",
        mortality_rate: "0.2%",
    },
    AsaClass {
        category: "asa_3",
        description: "Тяжелое системное заболевание с функциональными ограничениями",
        mortality_rate: "1.8%",
    },
    AsaClass {
        category: "asa_4",
        description: "Тяжелое заболевание, постоянно угрожающее жизни",
        mortality_rate: "7.8%",
    },
    AsaClass {
        category: "asa_5",
        description: "Умирающий пациент, не ожидающий выживания без операции",
        mortality_rate: "9.4%",
    },
    AsaClass {
        category: "asa_6",
        description: "Донор органов с подтвержденной смертью мозга",
        mortality_rate: "N/A",
    },
];

const UNKNOWN_DESCRIPTION: &str = "Неопределенный класс ASA";
const EMERGENCY_NOTE: &str = " (ЭКСТРЕННАЯ операция)";

/// ASA physical status: the submitted class is the score. Emergency surgery
/// adds the `E` modifier to any class below 6, including unrecognized ones.
pub fn score(answers: &Answers) -> ScoreResult {
    let asa_class = answers.number("asa_class");
    let is_emergency = answers.flag("is_emergency");
    let class = asa_class.trunc() as i64;

    let mut breakdown = Breakdown::new();
    breakdown.set("asa_class", class);
    breakdown.set("is_emergency", is_emergency);

    let entry = class
        .checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| CLASSES.get(i));

    let (mut category, mut description, mortality_rate) = match entry {
        Some(c) => (
            c.category.to_string(),
            c.description.to_string(),
            c.mortality_rate,
        ),
        None => (UNKNOWN_CATEGORY.to_string(), UNKNOWN_DESCRIPTION.to_string(), "N/A"),
    };

    if is_emergency && asa_class < 6.0 {
        category.push_str("_e");
        description.push_str(EMERGENCY_NOTE);
        breakdown.set("emergency_modifier", "E");
    }

    breakdown.set("description", description.as_str());
    breakdown.set("mortality_rate", mortality_rate);

    ScoreResult::new(asa_class, category, breakdown).with_description(description)
}
