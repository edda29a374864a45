/// Build the user prompt sent to the provider for one joke.
///
/// Total over its inputs: a style string outside the known set still yields a
/// prompt, using the generic clause. A blank category is treated as absent.
pub fn build_joke_prompt(topic: &str, style: &str, category: Option<&str>) -> String {
    let mut prompt = format!("Generate a {} joke", style);

    if let Some(category) = category.filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!(" in the {} category", category));
    }

    prompt.push_str(&format!(" about {}.", topic));
    prompt.push_str(style_clause(style));
    prompt.push_str(" Just return the joke, nothing else.");

    prompt
}

fn style_clause(style: &str) -> &'static str {
    match style {
        "pun" => " Use wordplay and double meanings. Make it clever and witty.",
        "one-liner" => " Keep it short and punchy. One sentence maximum.",
        "dad-joke" => " Make it wholesome and groan-worthy in a good way.",
        "dark" => " Make it edgy but tasteful. Not offensive.",
        "observational" => " Point out something relatable and funny about everyday life.",
        _ => " Make it funny and entertaining.",
    }
}
