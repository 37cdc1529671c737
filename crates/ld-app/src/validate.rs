//! Validation gate for selected runs.

use ld_core::RecipeVersion;
use ld_platform::{RunDetails, RunStatus};

use crate::error::{AppError, AppResult};

/// The only recipe this pipeline understands.
pub const EXPECTED_RECIPE: &str = "pollination/leed-daylight-option-two";

/// Oldest recipe release whose outputs carry the full artifact set.
pub const MIN_RECIPE_VERSION: RecipeVersion = RecipeVersion::new(0, 3, 4);

/// Check a run before anything is fetched: status, recipe identity,
/// then recipe version. The first failing check wins.
pub fn validate_run(details: &RunDetails) -> AppResult<()> {
    if details.status != RunStatus::Succeeded {
        return Err(AppError::Validation(format!(
            "The run status must be 'Succeeded'. The input run has status '{}'.",
            details.status
        )));
    }

    let recipe = &details.recipe;
    if recipe.full_name() != EXPECTED_RECIPE {
        return Err(AppError::Validation(format!(
            "This app is designed to work with the {EXPECTED_RECIPE} recipe. \
             The input run is using {}.",
            recipe.full_name()
        )));
    }

    let version = recipe
        .version()
        .map_err(|err| AppError::Validation(err.to_string()))?;
    if version < MIN_RECIPE_VERSION {
        return Err(AppError::Validation(format!(
            "Only versions {EXPECTED_RECIPE}:{MIN_RECIPE_VERSION} or higher are valid. \
             Current version of the recipe: {}.",
            recipe.tag
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ld_core::RunLocator;
    use ld_platform::Recipe;

    fn details(status: RunStatus, owner: &str, name: &str, tag: &str) -> RunDetails {
        RunDetails {
            locator: RunLocator::new("acme", "office", "job-1", "run-1"),
            status,
            recipe: Recipe {
                owner: owner.to_string(),
                name: name.to_string(),
                tag: tag.to_string(),
            },
            started_at: None,
            finished_at: None,
        }
    }

    #[test]
    fn accepts_succeeded_run_at_minimum_version() {
        let details = details(
            RunStatus::Succeeded,
            "pollination",
            "leed-daylight-option-two",
            "0.3.4",
        );
        validate_run(&details).expect("should accept");
    }

    #[test]
    fn rejects_unfinished_run_first() {
        // Wrong status and wrong recipe: the status message wins.
        let details = details(RunStatus::Running, "acme", "some-recipe", "0.0.1");
        let err = validate_run(&details).expect_err("should reject");
        assert!(err.to_string().contains("status"));
        assert!(err.to_string().contains("Running"));
    }

    #[test]
    fn rejects_wrong_recipe_with_both_names() {
        let details = details(RunStatus::Succeeded, "acme", "some-recipe", "1.0.0");
        let err = validate_run(&details).expect_err("should reject");
        let message = err.to_string();
        assert!(message.contains(EXPECTED_RECIPE));
        assert!(message.contains("acme/some-recipe"));
    }

    #[test]
    fn version_boundary_follows_precedence_rules() {
        let accepted = ["0.3.4", "0.3.5", "0.3.10", "0.4.0", "1.0.0"];
        for tag in accepted {
            let details = details(
                RunStatus::Succeeded,
                "pollination",
                "leed-daylight-option-two",
                tag,
            );
            validate_run(&details).unwrap_or_else(|err| panic!("{tag} rejected: {err}"));
        }

        let rejected = ["0.3.3", "0.3.2", "0.2.9", "0.0.1"];
        for tag in rejected {
            let details = details(
                RunStatus::Succeeded,
                "pollination",
                "leed-daylight-option-two",
                tag,
            );
            let err = validate_run(&details).expect_err("should reject");
            assert!(err.to_string().contains(tag));
        }
    }

    #[test]
    fn unparseable_tag_is_a_validation_error() {
        let details = details(
            RunStatus::Succeeded,
            "pollination",
            "leed-daylight-option-two",
            "latest",
        );
        let err = validate_run(&details).expect_err("should reject");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
