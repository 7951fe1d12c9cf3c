//! Part classification.
//!
//! Classification is an ordered table of [`Rule`]s evaluated top to bottom;
//! the first rule whose type tag or name keyword matches wins. Every
//! comparison is case-insensitive. Parts that match nothing are sensors.

use log::trace;

use partscape_core::{
    category::{Board, Category},
    model::Part,
};

/// What a matching rule resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Fixed(Category),
    /// Resolved further by board keywords in the name.
    Microcontroller,
}

/// One tier of the classification table.
#[derive(Debug)]
struct Rule {
    /// Exact (lowercased) values of the part type that select this tier.
    types: &'static [&'static str],
    /// Substrings of the (lowercased) part name that select this tier.
    keywords: &'static [&'static str],
    outcome: Outcome,
}

impl Rule {
    fn matches(&self, kind: &str, name: &str) -> bool {
        self.types.contains(&kind) || self.keywords.iter().any(|kw| name.contains(kw))
    }
}

/// Classification tiers, highest precedence first.
///
/// `"arm"` also catches names such as `"alarm"`; first-match-wins keeps the
/// frame tier ahead of it.
const RULES: &[Rule] = &[
    Rule {
        types: &["frame"],
        keywords: &["frame", "chassis"],
        outcome: Outcome::Fixed(Category::Frame),
    },
    Rule {
        types: &["enclosure"],
        keywords: &["enclosure", "box", "case"],
        outcome: Outcome::Fixed(Category::Enclosure),
    },
    Rule {
        types: &["wheel"],
        keywords: &["wheel", "tire"],
        outcome: Outcome::Fixed(Category::Wheel),
    },
    Rule {
        types: &["camera"],
        keywords: &["cam"],
        outcome: Outcome::Fixed(Category::Camera),
    },
    Rule {
        types: &[],
        keywords: &["arm"],
        outcome: Outcome::Fixed(Category::Arm),
    },
    Rule {
        types: &["propeller"],
        keywords: &["prop", "rotor"],
        outcome: Outcome::Fixed(Category::Propeller),
    },
    Rule {
        types: &["microcontroller"],
        keywords: &[],
        outcome: Outcome::Microcontroller,
    },
    Rule {
        types: &["display"],
        keywords: &["screen", "lcd", "oled"],
        outcome: Outcome::Fixed(Category::Display),
    },
    Rule {
        types: &["motor", "servo"],
        keywords: &["motor", "fan"],
        outcome: Outcome::Fixed(Category::Motor),
    },
    Rule {
        types: &["battery"],
        keywords: &["battery", "lipo"],
        outcome: Outcome::Fixed(Category::Battery),
    },
    Rule {
        types: &[],
        keywords: &["arduino"],
        outcome: Outcome::Fixed(Category::Microcontroller(Board::Uno)),
    },
    Rule {
        types: &[],
        keywords: &["pi", "raspberry"],
        outcome: Outcome::Fixed(Category::Microcontroller(Board::Pi)),
    },
];

/// Board keywords for type-tagged microcontrollers, in precedence order.
const BOARDS: &[(&[&str], Board)] = &[
    (&["uno", "mega"], Board::Uno),
    (&["pi", "raspberry"], Board::Pi),
    (&["cam"], Board::Esp32Cam),
];

/// Classify a part. Total and deterministic.
///
/// # Examples
///
/// ```
/// use partscape::classify::classify;
/// use partscape_core::{category::{Board, Category}, model::Part};
///
/// let part = Part::new("Arduino Mega 2560").with_kind("Microcontroller");
/// assert_eq!(classify(&part), Category::Microcontroller(Board::Uno));
///
/// assert_eq!(classify(&Part::new("DHT22")), Category::Sensor);
/// ```
pub fn classify(part: &Part) -> Category {
    let kind = part.kind_lowercase();
    let name = part.name.to_lowercase();

    let category = RULES
        .iter()
        .find(|rule| rule.matches(&kind, &name))
        .map(|rule| match rule.outcome {
            Outcome::Fixed(category) => category,
            Outcome::Microcontroller => Category::Microcontroller(board(&name)),
        })
        .unwrap_or(Category::Sensor);

    trace!(name = part.name, category:% = category; "Classified part");
    category
}

fn board(name: &str) -> Board {
    BOARDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| name.contains(kw)))
        .map(|&(_, board)| board)
        .unwrap_or(Board::Esp32)
}
