// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Responses to analysis ratings.

/// Response for anything that is not a rating from 1 to 5.
pub const RATING_PROMPT: &str = "Please rate this analysis on a scale of 1-5.";

/// Returns the acknowledgement for a user's rating.
///
/// The rating is trimmed and parsed as an integer. Anything outside 1..=5,
/// including non-numeric text, gets [`RATING_PROMPT`].
#[must_use]
pub fn handle_feedback(rating: &str) -> &'static str {
    match rating.trim().parse::<i64>() {
        Ok(1) => {
            "We are very sorry that the analysis did not meet your expectations. Could you please provide specific feedback on what went wrong?"
        }
        Ok(2) => {
            "Thank you for your feedback. We appreciate your input and would love to know more details on how we can improve."
        }
        Ok(3) => {
            "Thank you for your feedback. We are committed to continuous improvement. Could you share what aspects need enhancement?"
        }
        Ok(4) => "Thank you for your positive feedback! We're glad the analysis was helpful.",
        Ok(5) => {
            "Thank you for your excellent feedback! We are thrilled to have met your expectations and appreciate your input."
        }
        _ => RATING_PROMPT,
    }
}
