use crate::models::Fatwa;

/// Reorders a filtered result with the id list returned by the rank
/// augmenter: ranked ids float to the front in the order they were
/// returned, everything else follows in its original position, and a
/// record never appears twice (front group wins). An empty id list
/// leaves the order exactly as it was.
#[must_use]
pub fn apply_ranked_ids(filtered: Vec<Fatwa>, ranked_ids: &[String]) -> Vec<Fatwa> {
    if ranked_ids.is_empty() {
        return filtered;
    }

    let mut front = Vec::new();
    for id in ranked_ids {
        if let Some(record) = filtered.iter().find(|record| &record.id == id)
            && !front.iter().any(|kept: &Fatwa| kept.id == record.id)
        {
            front.push(record.clone());
        }
    }

    let rest: Vec<Fatwa> = filtered
        .into_iter()
        .filter(|record| !front.iter().any(|kept| kept.id == record.id))
        .collect();
    front.extend(rest);
    front
}
