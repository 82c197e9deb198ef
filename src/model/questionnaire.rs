pub const QUESTION_COUNT: usize = 20;
pub const MAX_VALUE: u8 = 4;
pub const MAX_SCORE: u32 = QUESTION_COUNT as u32 * MAX_VALUE as u32;

const STATEMENTS: [&str; QUESTION_COUNT] = [
    "Jeg bliver let overvældet af indtryk.",
    "Jeg opdager små detaljer, som andre ofte overser.",
    "Jeg bruger længere tid på at tænke ting igennem.",
    "Jeg foretrækker rolige omgivelser.",
    "Jeg reagerer stærkt på uventede afbrydelser.",
    "Jeg bearbejder information dybt og grundigt.",
    "Jeg har brug for mere tid til at omstille mig.",
    "Jeg bliver hurtigt mentalt udmattet.",
    "Jeg er meget opmærksom på stemninger hos andre.",
    "Jeg foretrækker at gøre én ting ad gangen.",
    "Jeg påvirkes lettere af støj end de fleste.",
    "Jeg trives bedst med tydelige rammer og struktur.",
    "Jeg bruger lang tid på at komme i gang med nye opgaver.",
    "Jeg har svært ved at sortere irrelevante stimuli fra.",
    "Jeg bliver let påvirket af andres humør.",
    "Jeg bruger lang tid på at træffe beslutninger.",
    "Jeg foretrækker dybe samtaler frem for smalltalk.",
    "Jeg kan have svært ved at skifte fokus hurtigt.",
    "Jeg føler mig ofte overstimuleret.",
    "Jeg bliver let distraheret, når der sker meget omkring mig.",
];

/// Answer labels, indexed by answer value.
const LABELS: [&str; MAX_VALUE as usize + 1] =
    ["Aldrig", "Sjældent", "Nogle gange", "Ofte", "Altid"];

pub const TITLE: &str = "DIN PERSONLIGE PROFIL";

const INTRO: &[&str] = &[
    "Denne test giver dig et indblik i, hvordan du bearbejder både følelsesmæssige \
     og sansemæssige indtryk, og hvordan dit mentale tempo påvirker dine reaktioner.",
    "Du besvarer 20 udsagn på en skala fra Aldrig til Altid.",
    "Testen er ikke en diagnose, men et psykologisk værktøj til selvindsigt.",
];

pub fn statements() -> &'static [&'static str; QUESTION_COUNT] {
    &STATEMENTS
}

pub fn intro() -> &'static [&'static str] {
    INTRO
}

pub fn labels() -> &'static [&'static str] {
    &LABELS
}

pub fn label_for(value: u8) -> Option<&'static str> {
    LABELS.get(value as usize).copied()
}

/// Case-insensitive label lookup. `Nogle gange` also accepts `_` or `-`
/// in place of the space.
pub fn value_for_label(label: &str) -> Option<u8> {
    let wanted = normalize_label(label);
    LABELS
        .iter()
        .position(|l| normalize_label(l) == wanted)
        .map(|idx| idx as u8)
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/questionnaire.rs"]
mod tests;
