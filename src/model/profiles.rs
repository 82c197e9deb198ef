use serde::Serialize;

/// Ordered by rank: a higher score never maps to a lower-ranked profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Profile {
    SlowProcessor,
    MixedProfile,
    #[serde(rename = "HSP")]
    Hsp,
}

const HSP_LINES: &[&str] = &[
    "Du registrerer flere nuancer i både indtryk og stemninger.",
    "Du bearbejder oplevelser dybt og grundigt.",
    "Du reagerer stærkt på stimuli og kan blive overstimuleret.",
    "Du har en rig indre verden og et fintfølende nervesystem.",
    "Du er empatisk og opmærksom på andre.",
    "Du har brug for ro og pauser for at lade op.",
];

const SLOW_PROCESSOR_LINES: &[&str] = &[
    "Du arbejder bedst i roligt tempo og med forudsigelighed.",
    "Du bearbejder indtryk grundigt, men langsomt.",
    "Du har brug for ekstra tid til omstilling og beslutninger.",
    "Du trives med faste rammer og struktur.",
    "Du kan føle dig presset, når tingene går hurtigt.",
    "Du har god udholdenhed, når du arbejder i dit eget tempo.",
];

const MIXED_PROFILE_LINES: &[&str] = &[
    "Du veksler naturligt mellem hurtig og langsom bearbejdning.",
    "Du håndterer de fleste stimuli uden at blive overvældet.",
    "Du har en god balance mellem intuition og eftertænksomhed.",
    "Du kan tilpasse dig forskellige miljøer og tempoer.",
    "Du bliver påvirket i perioder, men finder hurtigt balancen igen.",
    "Du fungerer bredt socialt og mentalt i mange typer situationer.",
];

impl Profile {
    pub fn rank(self) -> u8 {
        match self {
            Profile::SlowProcessor => 0,
            Profile::MixedProfile => 1,
            Profile::Hsp => 2,
        }
    }

    /// Label shown to the respondent.
    pub fn label(self) -> &'static str {
        match self {
            Profile::SlowProcessor => "Slow Processor",
            Profile::MixedProfile => "Mellemprofil",
            Profile::Hsp => "HSP",
        }
    }

    pub fn description(self) -> &'static [&'static str] {
        match self {
            Profile::SlowProcessor => SLOW_PROCESSOR_LINES,
            Profile::MixedProfile => MIXED_PROFILE_LINES,
            Profile::Hsp => HSP_LINES,
        }
    }
}
