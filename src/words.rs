#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordItem
{
    pub word: &'static str,
    pub hint: &'static str,
}

pub static WORD_ITEMS: [WordItem; 8] = [
    WordItem { word: "BRAIN", hint: "Organ that controls the body" },
    WordItem { word: "FOCUS", hint: "Concentrated attention" },
    WordItem { word: "PUZZLE", hint: "A problem or game to solve" },
    WordItem { word: "MEMORY", hint: "Ability to recall information" },
    WordItem { word: "LEARN", hint: "Acquire knowledge or skill" },
    WordItem { word: "SMART", hint: "Having quick intelligence" },
    WordItem { word: "THINK", hint: "Use your mind to reason" },
    WordItem { word: "SPEED", hint: "Rate of movement or action" },
];
