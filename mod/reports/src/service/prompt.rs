//! Prompt composition. Fixed templates, reviews newest first, so the same
//! inputs always produce the same prompt.

use crate::service::collect::ReviewSample;

const NO_COMMENT: &str = "No comment";

/// Prompt for the restaurant-facing business-analysis report.
pub fn business_analysis(reviews: &[ReviewSample]) -> String {
    let mut prompt = String::from(
        "Analyze the following restaurant reviews, each with its text and a star \
         rating from 1 to 5. Provide a detailed report that includes:\n\
         1. Overall sentiment analysis (a general view, not review by review).\n\
         2. A summary of general trends (for example, strengths and weaknesses mentioned).\n\
         3. Improvement suggestions based on the reviews.\n\
         4. The overall average rating and an overview of the restaurant's performance.\n\
         5. Do not assess reviews individually; write a well-structured general summary.\n\
         6. Keep a professional tone throughout.\n\
         The reviews follow:\n",
    );
    for (i, review) in reviews.iter().enumerate() {
        let text = review.review_text.as_deref().unwrap_or(NO_COMMENT);
        prompt.push_str(&format!(
            "Review {}: \"{}\" ({} stars)\n",
            i + 1,
            text,
            review.rating
        ));
    }
    prompt
}

/// Prompt for the client-facing recommendation report.
pub fn recommendation(
    reviews: &[ReviewSample],
    restaurant_tags: &[String],
    client_tags: &[String],
) -> String {
    let mut prompt = format!(
        "Analyze the following restaurant reviews, each with text and a star rating \
         from 1 to 5, together with the restaurant's tags ({}) and the client's \
         tags ({}). Provide a report that:\n\
         1. Assesses whether the restaurant is recommendable for this client based \
         on the reviews and the given tags.\n\
         2. Summarizes the general trends (strengths and weaknesses).\n\
         3. Gives a clear recommendation (yes/no) with a justification.\n\
         4. Keeps the whole report within 5 lines.\n\
         5. If there are no reviews at all, reply only \"Restaurant not rated\" and \
         nothing else.\n\
         The reviews follow:\n",
        restaurant_tags.join(", "),
        client_tags.join(", "),
    );
    for review in reviews {
        let text = review.review_text.as_deref().unwrap_or(NO_COMMENT);
        prompt.push_str(&format!(
            "{} ({} stars): \"{}\"\n",
            review.reviewer_name, review.rating, text
        ));
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::collect::ReviewSample;

    fn sample(name: &str, rating: i64, text: Option<&str>) -> ReviewSample {
        ReviewSample {
            reviewer_name: name.into(),
            rating,
            review_text: text.map(str::to_string),
        }
    }

    #[test]
    fn analysis_numbers_reviews_and_fills_placeholder() {
        let reviews = vec![
            sample("Ana", 5, Some("Great pasta")),
            sample("Bo", 2, None),
        ];
        let prompt = business_analysis(&reviews);
        assert!(prompt.contains("Review 1: \"Great pasta\" (5 stars)"));
        assert!(prompt.contains("Review 2: \"No comment\" (2 stars)"));
    }

    #[test]
    fn analysis_prompt_is_deterministic() {
        let reviews = vec![sample("Ana", 4, Some("ok"))];
        assert_eq!(business_analysis(&reviews), business_analysis(&reviews));
    }

    #[test]
    fn recommendation_carries_both_tag_lists() {
        let reviews = vec![sample("Ana", 4, Some("Nice"))];
        let prompt = recommendation(
            &reviews,
            &["italian".into(), "cozy".into()],
            &["vegan".into()],
        );
        assert!(prompt.contains("restaurant's tags (italian, cozy)"));
        assert!(prompt.contains("client's tags (vegan)"));
        assert!(prompt.contains("Ana (4 stars): \"Nice\""));
    }

    #[test]
    fn recommendation_instructs_on_empty_reviews() {
        let prompt = recommendation(&[], &[], &[]);
        assert!(prompt.contains("\"Restaurant not rated\""));
        assert!(prompt.ends_with("The reviews follow:\n"));
    }
}
