use chrono::NaiveDate;

/// Number of problems requested per day
pub const PROBLEM_COUNT: usize = 5;

/// Build the request for one day's worksheet.
///
/// The heading layout here is what the page script keys on to hide
/// hints and answers, so the two must change together.
pub fn daily_prompt(date: NaiveDate) -> String {
    let today = date.format("%Y-%m-%d");
    format!(
        r#"Create {count} kid-friendly math problems for Grades 2–4 in Canadian primary school.

Guidelines:
- Mix problem types: 2 addition, 1 subtraction, 1 multiplication, 1 word problem.
- Use numbers under 100.
- Keep wording short and clear.
- Write every problem twice: once in English, then once in French (Canadian French).
- Make the word problem about everyday life (fruits, toys, sharing, money).
- Give one small hint per problem that does not reveal the answer.
- For every answer, list the steps as a numbered list, then give the final answer in bold.
- Encourage kids gently.
- Optionally add one short encouragement line and a kindness story of 3–4 sentences.

Format in Markdown:
# Daily Math - {today}
## Problems
### Problem 1
- **English:** ...
- **Français :** ...
### Problem 2
...
## Hints
1. ...
2. ...
## Answers
### Problem 1
1. ...
2. ...

**Answer:** ...
## Encouragement
...
## Kindness Story
...
"#,
        count = PROBLEM_COUNT,
        today = today,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_date_heading() {
        let prompt = daily_prompt(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(prompt.contains("# Daily Math - 2024-03-05"));
        assert!(prompt.starts_with("Create 5 kid-friendly math problems"));
    }

    #[test]
    fn test_prompt_requests_bilingual_sections() {
        let prompt = daily_prompt(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        for section in ["## Problems", "## Hints", "## Answers", "## Kindness Story"] {
            assert!(prompt.contains(section), "missing {}", section);
        }
        assert!(prompt.contains("**Français :**"));
    }
}
