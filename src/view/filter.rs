use serde::{Serialize, Serializer};

use super::state::ViewState;
use crate::dataset::Dataset;
use crate::models::{Prompt, PromptKey, Stage};

/// One surviving stage together with the prompts to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageView<'a> {
    pub stage: &'a Stage,
    pub prompts: Vec<&'a Prompt>,
}

impl<'a> StageView<'a> {
    fn whole(stage: &'a Stage) -> Self {
        Self {
            stage,
            prompts: stage.prompts.iter().collect(),
        }
    }

    /// Owned copy with only the surviving prompts.
    pub fn to_stage(&self) -> Stage {
        Stage {
            id: self.stage.id,
            title: self.stage.title.clone(),
            description: self.stage.description.clone(),
            prompts: self.prompts.iter().map(|p| (*p).clone()).collect(),
        }
    }
}

// Same shape as a dataset stage, restricted to the surviving prompts.
impl Serialize for StageView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'b> {
            id: u32,
            title: &'b str,
            description: &'b str,
            prompts: &'b [&'b Prompt],
        }

        Repr {
            id: self.stage.id,
            title: &self.stage.title,
            description: &self.stage.description,
            prompts: &self.prompts,
        }
        .serialize(serializer)
    }
}

/// Filtered, ordered stages for one render. Borrows from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DerivedView<'a> {
    stages: Vec<StageView<'a>>,
}

impl<'a> DerivedView<'a> {
    pub fn stages(&self) -> &[StageView<'a>] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn prompt_count(&self) -> usize {
        self.stages.iter().map(|s| s.prompts.len()).sum()
    }

    /// Every visible prompt in display order, with its owning stage.
    pub fn prompts(&self) -> impl Iterator<Item = (&'a Stage, &'a Prompt)> + '_ {
        self.stages
            .iter()
            .flat_map(|sv| sv.prompts.iter().map(move |p| (sv.stage, *p)))
    }

    /// Key of the `index`-th visible prompt.
    pub fn prompt_key_at(&self, index: usize) -> Option<PromptKey> {
        self.prompts()
            .nth(index)
            .map(|(stage, prompt)| stage.key_for(prompt))
    }

    pub fn to_stages(&self) -> Vec<Stage> {
        self.stages.iter().map(StageView::to_stage).collect()
    }
}

/// Compute what to display for `state`.
///
/// With an empty search term the stage selection applies: one stage with all
/// of its prompts, nothing if the id is unknown, or the whole dataset when no
/// stage is selected. A non-empty term ignores the stage selection and keeps
/// every prompt whose text contains it case-insensitively, dropping stages
/// left with no prompts. The term is used literally, without trimming.
pub fn compute_view<'a>(dataset: &'a Dataset, state: &ViewState) -> DerivedView<'a> {
    if state.search_term.is_empty() {
        let stages = match state.active_stage_id {
            Some(id) => dataset
                .stages()
                .iter()
                .filter(|s| s.id == id)
                .map(StageView::whole)
                .collect(),
            None => dataset.stages().iter().map(StageView::whole).collect(),
        };
        return DerivedView { stages };
    }

    let needle = state.search_term.to_lowercase();
    let stages = dataset
        .stages()
        .iter()
        .map(|stage| StageView {
            stage,
            prompts: stage
                .prompts
                .iter()
                .filter(|p| p.matches_lowercase(&needle))
                .collect(),
        })
        .filter(|sv| !sv.prompts.is_empty())
        .collect();

    DerivedView { stages }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Stage::new(1, "Intro", "Opening moves")
                .with_prompt(1, "Tell a story")
                .with_prompt(2, "Ask a question"),
            Stage::new(2, "Close", "Landing")
                .with_prompt(3, "Call to action"),
        ])
        .unwrap()
    }

    fn state(term: &str, stage: Option<u32>) -> ViewState {
        ViewState {
            search_term: term.to_string(),
            active_stage_id: stage,
        }
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let dataset = sample();
        let view = compute_view(&dataset, &ViewState::default());
        assert_eq!(view.to_stages(), dataset.stages());
        assert_eq!(view.prompt_count(), 3);
    }

    #[test]
    fn test_stage_selection_returns_full_stage() {
        let dataset = sample();
        let view = compute_view(&dataset, &state("", Some(2)));
        assert_eq!(view.len(), 1);
        assert_eq!(view.stages()[0].stage.id, 2);
        assert_eq!(view.stages()[0].prompts.len(), 1);
        assert_eq!(view.stages()[0].prompts[0].id, 3);
    }

    #[test]
    fn test_unknown_stage_is_empty() {
        let dataset = sample();
        let view = compute_view(&dataset, &state("", Some(42)));
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_filters_prompts_and_drops_empty_stages() {
        let dataset = sample();
        let view = compute_view(&dataset, &state("story", None));
        assert_eq!(view.len(), 1);
        assert_eq!(view.stages()[0].stage.id, 1);
        let ids: Vec<u32> = view.stages()[0].prompts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dataset = sample();
        let lower = compute_view(&dataset, &state("call", None));
        let upper = compute_view(&dataset, &state("CALL", None));
        assert_eq!(lower, upper);
        assert_eq!(lower.prompt_count(), 1);
    }

    #[test]
    fn test_search_ignores_stage_selection() {
        let dataset = sample();
        let with_stage = compute_view(&dataset, &state("a", Some(2)));
        let without = compute_view(&dataset, &state("a", None));
        assert_eq!(with_stage, without);
        assert_eq!(with_stage.len(), 2);
    }

    #[test]
    fn test_whitespace_term_is_literal() {
        let dataset = sample();
        let single = compute_view(&dataset, &state(" ", None));
        assert_eq!(single.prompt_count(), 3);

        let double = compute_view(&dataset, &state("  ", None));
        assert!(double.is_empty());

        let padded = compute_view(&dataset, &state(" story", None));
        assert_eq!(padded.prompt_count(), 1);
    }

    #[test]
    fn test_no_match_is_empty() {
        let dataset = sample();
        assert!(compute_view(&dataset, &state("xyz", None)).is_empty());
    }

    #[test]
    fn test_prompt_iteration_order_and_keys() {
        let dataset = sample();
        let view = compute_view(&dataset, &ViewState::default());
        let texts: Vec<&str> = view.prompts().map(|(_, p)| p.text.as_str()).collect();
        assert_eq!(texts, vec!["Tell a story", "Ask a question", "Call to action"]);
        assert_eq!(view.prompt_key_at(2), Some(PromptKey::new(2, 3)));
        assert_eq!(view.prompt_key_at(3), None);
    }

    #[test]
    fn test_view_serializes_filtered_prompts() {
        let dataset = sample();
        let view = compute_view(&dataset, &state("question", None));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1,
                "title": "Intro",
                "description": "Opening moves",
                "prompts": [{ "id": 2, "text": "Ask a question" }]
            }])
        );
    }
}
