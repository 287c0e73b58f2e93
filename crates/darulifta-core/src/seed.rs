//! Fixed seed content loaded at startup and on `reset`. A process
//! restart always comes back to exactly this data.

use crate::models::{Category, Fatwa, MuftiAccount};

fn record(
    id: &str,
    fatwa_number: &str,
    question_title: &str,
    question_details: &str,
    answer: &str,
    category: Category,
    date: &str,
    views: u64,
    featured: bool,
) -> Fatwa {
    Fatwa {
        id: id.to_string(),
        fatwa_number: fatwa_number.to_string(),
        question_title: question_title.to_string(),
        question_details: question_details.to_string(),
        answer: answer.to_string(),
        category,
        date: date.to_string(),
        views,
        featured,
        citations: Vec::new(),
        mufti_name: None,
    }
}

#[must_use]
pub fn seed_fatwas() -> Vec<Fatwa> {
    vec![
        record(
            "1001",
            "L-2023-1001",
            "Ruling on combined prayers during travel",
            "I am travelling for 3 days. Can I combine Zuhr and Asr prayers together while I am stopping at a rest area?",
            "In the Hanafi school of thought, combining prayers (Jam' Bayn al-Salatayn) in terms of time (praying one in the time of the other) is not permitted except on the day of Arafah. However, 'Jam' Suwari' (apparent combination) is permitted, where you delay Zuhr until the end of its time and pray Asr at the beginning of its time.",
            Category::Prayer,
            "2023-10-15",
            1240,
            true,
        ),
        record(
            "1002",
            "L-2023-1002",
            "Investing in Stocks",
            "Is it permissible to invest in the stock market? Specifically technology companies.",
            "Investing in stocks is permissible subject to certain conditions: 1) The core business of the company must be Halal. 2) The company's income from interest must be minimal and purified. 3) The company must have illiquid assets. Consult a local scholar for specific stock screening.",
            Category::Business,
            "2023-10-18",
            3500,
            true,
        ),
        record(
            "1003",
            "L-2023-1003",
            "Meaning of a dream about rain",
            "I saw heavy rain in my dream. What does this signify?",
            "Rain in a dream generally signifies mercy and relief from distress, provided it does not cause destruction. It may also indicate knowledge and wisdom.",
            Category::Misc,
            "2023-11-02",
            890,
            false,
        ),
        record(
            "1004",
            "L-2023-1004",
            "Zakat on Gold Jewelry",
            "My wife has gold jewelry that she wears occasionally. Is Zakat due on it?",
            "According to the Hanafi Madhhab, Zakat is obligatory on gold and silver jewelry regardless of whether it is worn or not, provided it reaches the Nisab threshold (87.48 grams of gold).",
            Category::Zakat,
            "2023-11-05",
            5600,
            true,
        ),
        record(
            "1005",
            "L-2023-1005",
            "Nikah over video call",
            "Can a Nikah be performed over a video call if the groom is in another country?",
            "For a valid Nikah, the physical presence of the witnesses and the contracting parties (or their proxies) in one gathering (Majlis) is a condition. A digital video call does not constitute a single Majlis in the physical sense. Therefore, the groom should appoint a proxy (Wakil) who is physically present at the gathering to contract the marriage on his behalf.",
            Category::Marriage,
            "2023-12-01",
            4200,
            false,
        ),
    ]
}

#[must_use]
pub fn seed_muftis() -> Vec<MuftiAccount> {
    vec![MuftiAccount {
        username: "Abdullahshah".to_string(),
        email: "mufti@example.com".to_string(),
        name: "Mufti Abdullah Shah".to_string(),
        password: "ad123min1".to_string(),
    }]
}
