use std::fmt::Write as _;

/// Freeform advisory prompt; mirrors the site's assistant persona and
/// the mandatory non-binding framing.
#[must_use]
pub(super) fn freeform_prompt(question: &str, context: Option<&str>) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are a helpful assistant for an Islamic Fatwa website (Darul Ifta)."
    );
    let _ = writeln!(prompt, "The user is asking: \"{question}\".");
    if let Some(context) = context {
        let _ = writeln!(prompt, "Context/Existing Fatwas to consider: {context}");
    }
    let _ = writeln!(prompt, "Please provide a polite, concise, and informative response.");
    let _ = writeln!(
        prompt,
        "IMPORTANT: If the question requires a specific legal ruling (Fatwa), clearly state that \
         \"This is an AI-generated summary for informational purposes only and not a formal Fatwa. \
         Please consult a qualified Mufti for a binding ruling.\""
    );
    let _ = write!(prompt, "Format the response with clear paragraphs.");
    prompt
}

/// Rank prompt: compact (id, title) listing plus the query, asking for a
/// strict JSON array of relevant ids.
#[must_use]
pub(super) fn rank_prompt(query: &str, listing: &[(String, String)]) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "I have a list of fatwas with the following titles and IDs:");
    for (id, title) in listing {
        let _ = writeln!(prompt, "ID: {id}, Title: {title}");
    }
    let _ = writeln!(prompt, "The user searched for: \"{query}\".");
    let _ = writeln!(
        prompt,
        "Return a JSON array of the IDs of the fatwas that are most relevant to this search query. \
         If none are relevant, return an empty array."
    );
    let _ = write!(prompt, "Example format: [\"1001\", \"1004\"]");
    prompt
}

/// Autocomplete prompt: partial query plus contextual titles, asking for
/// a short JSON array of full-question completions.
#[must_use]
pub(super) fn suggest_prompt(partial: &str, titles: &[String], limit: usize) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "A visitor of an Islamic Fatwa website is typing a search query: \"{partial}\"."
    );
    let _ = writeln!(prompt, "Existing fatwa titles on the site:");
    for title in titles {
        let _ = writeln!(prompt, "- {title}");
    }
    let _ = writeln!(
        prompt,
        "Suggest up to {limit} short completions of the visitor's query, as full search phrases."
    );
    let _ = write!(
        prompt,
        "Return a JSON array of strings only. Example format: [\"zakat on gold jewelry\"]"
    );
    prompt
}

/// Grounded ("AI Sir") prompt for the open-domain search with citations.
#[must_use]
pub(super) fn grounded_prompt(query: &str) -> String {
    format!(
        "You are an assistant for an Islamic knowledge site. Answer the following question \
         using reliable sources, and keep the answer concise and respectful: \"{query}\""
    )
}
