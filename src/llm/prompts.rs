/// Build the summary prompt sent to the chat model.
pub fn build_summary_prompt(text: &str) -> String {
    format!("Summarize the following text into 3 sentences:\n\n{text}")
}
