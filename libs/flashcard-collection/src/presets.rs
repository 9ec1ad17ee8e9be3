//! Built-in preset card sets.
//!
//! Presets are addressed by string keys. Two families share one namespace:
//! - categories such as `hiraganaBasic` or `katakanaYoon`
//! - single rows such as `hiragana-ka` or `katakana-pa`

use crate::types::CardPair;
use std::collections::HashMap;

/// Resolves preset keys to card pairs and display labels.
pub trait PresetLookup {
    /// Pairs for `key`, or `None` if the key is unknown.
    fn lookup(&self, key: &str) -> Option<Vec<CardPair>>;

    /// Human-readable name for `key`. Unknown keys fall back to the key itself.
    fn label_for(&self, key: &str) -> String;
}

/// User-supplied preset table.
#[derive(Debug, Clone, Default)]
pub struct PresetTable {
    entries: HashMap<String, (String, Vec<CardPair>)>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a preset.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        pairs: Vec<CardPair>,
    ) {
        self.entries.insert(key.into(), (label.into(), pairs));
    }

    pub fn with(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        pairs: Vec<CardPair>,
    ) -> Self {
        self.insert(key, label, pairs);
        self
    }
}

impl PresetLookup for PresetTable {
    fn lookup(&self, key: &str) -> Option<Vec<CardPair>> {
        self.entries.get(key).map(|(_, pairs)| pairs.clone())
    }

    fn label_for(&self, key: &str) -> String {
        self.entries
            .get(key)
            .map_or_else(|| key.to_string(), |(label, _)| label.clone())
    }
}

/// Kana script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::Hiragana, Script::Katakana];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hiragana => "hiragana",
            Self::Katakana => "katakana",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Hiragana => "Hiragana",
            Self::Katakana => "Katakana",
        }
    }

    fn from_prefix(key: &str) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|script| key.strip_prefix(script.as_str()).map(|rest| (script, rest)))
    }
}

/// Category of kana within a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Basic,
    Tenten,
    Handakuten,
    Yoon,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Basic,
        Category::Tenten,
        Category::Handakuten,
        Category::Yoon,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Tenten => "Tenten",
            Self::Handakuten => "Handakuten",
            Self::Yoon => "Yoon",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == s)
    }
}

/// (hiragana, katakana, romaji)
type Kana = (&'static str, &'static str, &'static str);

#[derive(Debug)]
struct Row {
    name: &'static str,
    category: Category,
    kana: &'static [Kana],
}

const ROWS: &[Row] = &[
    Row {
        name: "a",
        category: Category::Basic,
        kana: &[
            ("あ", "ア", "a"),
            ("い", "イ", "i"),
            ("う", "ウ", "u"),
            ("え", "エ", "e"),
            ("お", "オ", "o"),
        ],
    },
    Row {
        name: "ka",
        category: Category::Basic,
        kana: &[
            ("か", "カ", "ka"),
            ("き", "キ", "ki"),
            ("く", "ク", "ku"),
            ("け", "ケ", "ke"),
            ("こ", "コ", "ko"),
        ],
    },
    Row {
        name: "sa",
        category: Category::Basic,
        kana: &[
            ("さ", "サ", "sa"),
            ("し", "シ", "shi"),
            ("す", "ス", "su"),
            ("せ", "セ", "se"),
            ("そ", "ソ", "so"),
        ],
    },
    Row {
        name: "ta",
        category: Category::Basic,
        kana: &[
            ("た", "タ", "ta"),
            ("ち", "チ", "chi"),
            ("つ", "ツ", "tsu"),
            ("て", "テ", "te"),
            ("と", "ト", "to"),
        ],
    },
    Row {
        name: "na",
        category: Category::Basic,
        kana: &[
            ("な", "ナ", "na"),
            ("に", "ニ", "ni"),
            ("ぬ", "ヌ", "nu"),
            ("ね", "ネ", "ne"),
            ("の", "ノ", "no"),
        ],
    },
    Row {
        name: "ha",
        category: Category::Basic,
        kana: &[
            ("は", "ハ", "ha"),
            ("ひ", "ヒ", "hi"),
            ("ふ", "フ", "fu"),
            ("へ", "ヘ", "he"),
            ("ほ", "ホ", "ho"),
        ],
    },
    Row {
        name: "ma",
        category: Category::Basic,
        kana: &[
            ("ま", "マ", "ma"),
            ("み", "ミ", "mi"),
            ("む", "ム", "mu"),
            ("め", "メ", "me"),
            ("も", "モ", "mo"),
        ],
    },
    Row {
        name: "ya",
        category: Category::Basic,
        kana: &[
            ("や", "ヤ", "ya"),
            ("ゆ", "ユ", "yu"),
            ("よ", "ヨ", "yo"),
        ],
    },
    Row {
        name: "ra",
        category: Category::Basic,
        kana: &[
            ("ら", "ラ", "ra"),
            ("り", "リ", "ri"),
            ("る", "ル", "ru"),
            ("れ", "レ", "re"),
            ("ろ", "ロ", "ro"),
        ],
    },
    Row {
        name: "wa",
        category: Category::Basic,
        kana: &[
            ("わ", "ワ", "wa"),
            ("を", "ヲ", "wo"),
            ("ん", "ン", "n"),
        ],
    },
    Row {
        name: "ga",
        category: Category::Tenten,
        kana: &[
            ("が", "ガ", "ga"),
            ("ぎ", "ギ", "gi"),
            ("ぐ", "グ", "gu"),
            ("げ", "ゲ", "ge"),
            ("ご", "ゴ", "go"),
        ],
    },
    Row {
        name: "za",
        category: Category::Tenten,
        kana: &[
            ("ざ", "ザ", "za"),
            ("じ", "ジ", "ji"),
            ("ず", "ズ", "zu"),
            ("ぜ", "ゼ", "ze"),
            ("ぞ", "ゾ", "zo"),
        ],
    },
    Row {
        name: "da",
        category: Category::Tenten,
        kana: &[
            ("だ", "ダ", "da"),
            ("ぢ", "ヂ", "ji"),
            ("づ", "ヅ", "zu"),
            ("で", "デ", "de"),
            ("ど", "ド", "do"),
        ],
    },
    Row {
        name: "ba",
        category: Category::Tenten,
        kana: &[
            ("ば", "バ", "ba"),
            ("び", "ビ", "bi"),
            ("ぶ", "ブ", "bu"),
            ("べ", "ベ", "be"),
            ("ぼ", "ボ", "bo"),
        ],
    },
    Row {
        name: "pa",
        category: Category::Handakuten,
        kana: &[
            ("ぱ", "パ", "pa"),
            ("ぴ", "ピ", "pi"),
            ("ぷ", "プ", "pu"),
            ("ぺ", "ペ", "pe"),
            ("ぽ", "ポ", "po"),
        ],
    },
];

const YOON: &[Kana] = &[
    ("きゃ", "キャ", "kya"),
    ("きゅ", "キュ", "kyu"),
    ("きょ", "キョ", "kyo"),
    ("しゃ", "シャ", "sha"),
    ("しゅ", "シュ", "shu"),
    ("しょ", "ショ", "sho"),
    ("ちゃ", "チャ", "cha"),
    ("ちゅ", "チュ", "chu"),
    ("ちょ", "チョ", "cho"),
    ("にゃ", "ニャ", "nya"),
    ("にゅ", "ニュ", "nyu"),
    ("にょ", "ニョ", "nyo"),
    ("ひゃ", "ヒャ", "hya"),
    ("ひゅ", "ヒュ", "hyu"),
    ("ひょ", "ヒョ", "hyo"),
    ("みゃ", "ミャ", "mya"),
    ("みゅ", "ミュ", "myu"),
    ("みょ", "ミョ", "myo"),
    ("りゃ", "リャ", "rya"),
    ("りゅ", "リュ", "ryu"),
    ("りょ", "リョ", "ryo"),
    ("ぎゃ", "ギャ", "gya"),
    ("ぎゅ", "ギュ", "gyu"),
    ("ぎょ", "ギョ", "gyo"),
    ("じゃ", "ジャ", "ja"),
    ("じゅ", "ジュ", "ju"),
    ("じょ", "ジョ", "jo"),
    ("びゃ", "ビャ", "bya"),
    ("びゅ", "ビュ", "byu"),
    ("びょ", "ビョ", "byo"),
    ("ぴゃ", "ピャ", "pya"),
    ("ぴゅ", "ピュ", "pyu"),
    ("ぴょ", "ピョ", "pyo"),
];

const HIRAGANA_GROUP: &[&str] = &[
    "hiraganaBasic",
    "hiraganaTenten",
    "hiraganaHandakuten",
    "hiraganaYoon",
];
const KATAKANA_GROUP: &[&str] = &[
    "katakanaBasic",
    "katakanaTenten",
    "katakanaHandakuten",
    "katakanaYoon",
];

/// A resolved preset key.
#[derive(Debug, Clone, Copy)]
enum KanaKey {
    Category(Script, Category),
    Row(Script, &'static Row),
}

impl KanaKey {
    fn parse(key: &str) -> Option<Self> {
        let (script, rest) = Script::from_prefix(key)?;
        match rest.strip_prefix('-') {
            Some(row_name) => ROWS
                .iter()
                .find(|row| row.name == row_name)
                .map(|row| Self::Row(script, row)),
            None => Category::from_str(rest).map(|category| Self::Category(script, category)),
        }
    }

    fn kana(self) -> Vec<Kana> {
        match self {
            Self::Category(_, Category::Yoon) => YOON.to_vec(),
            Self::Category(_, category) => ROWS
                .iter()
                .filter(|row| row.category == category)
                .flat_map(|row| row.kana.iter().copied())
                .collect(),
            Self::Row(_, row) => row.kana.to_vec(),
        }
    }

    fn script(self) -> Script {
        match self {
            Self::Category(script, _) | Self::Row(script, _) => script,
        }
    }
}

/// Hiragana and katakana presets, answered in Hepburn romaji.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaPresets;

impl KanaPresets {
    pub fn new() -> Self {
        Self
    }

    /// Every category key, hiragana first.
    pub fn category_keys() -> Vec<String> {
        Script::ALL
            .into_iter()
            .flat_map(|script| {
                Category::ALL
                    .into_iter()
                    .map(move |category| format!("{}{}", script.as_str(), category.as_str()))
            })
            .collect()
    }

    /// Every row key, hiragana first.
    pub fn row_keys() -> Vec<String> {
        Script::ALL
            .into_iter()
            .flat_map(|script| {
                ROWS.iter()
                    .map(move |row| format!("{}-{}", script.as_str(), row.name))
            })
            .collect()
    }

    /// Category keys making up a named group (`allHiragana`, `allKatakana`).
    pub fn group(name: &str) -> Option<&'static [&'static str]> {
        match name {
            "allHiragana" => Some(HIRAGANA_GROUP),
            "allKatakana" => Some(KATAKANA_GROUP),
            _ => None,
        }
    }
}

impl PresetLookup for KanaPresets {
    fn lookup(&self, key: &str) -> Option<Vec<CardPair>> {
        let key = KanaKey::parse(key)?;
        let script = key.script();
        let pairs = key
            .kana()
            .into_iter()
            .map(|(hiragana, katakana, romaji)| {
                let question = match script {
                    Script::Hiragana => hiragana,
                    Script::Katakana => katakana,
                };
                CardPair {
                    question: question.to_string(),
                    answer: romaji.to_string(),
                }
            })
            .collect();
        Some(pairs)
    }

    fn label_for(&self, key: &str) -> String {
        match KanaKey::parse(key) {
            Some(KanaKey::Category(script, category)) => {
                format!("{} {}", script.label(), category.as_str())
            }
            Some(KanaKey::Row(script, row)) => {
                format!("{} Row {}", script.label(), row.name.to_uppercase())
            }
            None => key.to_string(),
        }
    }
}
