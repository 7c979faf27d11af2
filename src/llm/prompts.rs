//! Prompt templates
//!
//! Instructions are written in Vietnamese, the language of the lecture
//! material this service is built for.

/// Concise summary keeping every main idea
pub const SUMMARY_INSTRUCTION: &str =
    "Tóm tắt bài giảng sau đây ngắn gọn, súc tích và đầy đủ ý chính:";

/// Ask for exactly `count` flashcards as alternating `Q:` / `A:` lines
pub fn flashcard_instruction(count: u32) -> String {
    format!(
        "Dựa trên nội dung sau, hãy tạo đúng {} flashcards.\n\
         Mỗi flashcard ở dạng:\n\
         Q: [Câu hỏi]\n\
         A: [Câu trả lời]",
        count
    )
}

/// Answer a free-form question from the supplied context
pub fn answer_instruction(question: &str) -> String {
    format!("Dựa trên nội dung sau, hãy trả lời câu hỏi: {}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_instruction_mentions_count_and_format() {
        let instruction = flashcard_instruction(7);
        assert!(instruction.contains("tạo đúng 7 flashcards"));
        assert!(instruction.contains("\nQ: [Câu hỏi]\nA: [Câu trả lời]"));
    }

    #[test]
    fn test_answer_instruction_embeds_question() {
        assert_eq!(
            answer_instruction("Định lý Pythagore là gì?"),
            "Dựa trên nội dung sau, hãy trả lời câu hỏi: Định lý Pythagore là gì?"
        );
    }
}
