// src/state/scene.rs
use tracing::debug;

use crate::data::ProfitSummary;

pub const SCENE_COUNT: usize = 3;

// Scene/position tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    StateBreakdown,
    CategoryTotals,
    DiscountScatter,
}

/// Fixed scene order; `SceneController::index` indexes into this table.
pub const SCENE_ORDER: [SceneKind; SCENE_COUNT] = [
    SceneKind::StateBreakdown,
    SceneKind::CategoryTotals,
    SceneKind::DiscountScatter,
];

impl SceneKind {
    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::StateBreakdown => "Profit by Category per State",
            SceneKind::CategoryTotals => "Nation Wide Total Profit by Category",
            SceneKind::DiscountScatter => "Profit vs. Discount Analysis",
        }
    }
}

/// Scene 1's private view state. Built fresh on scene entry and discarded
/// on exit, so the selection never survives a scene transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateBreakdownState {
    pub selected_state: Option<String>,
}

impl StateBreakdownState {
    /// Default selection is the alphabetically first state; none when the
    /// dataset is empty.
    fn enter(summary: &ProfitSummary) -> Self {
        Self {
            selected_state: summary.by_state.sorted_keys().into_iter().next(),
        }
    }
}

/// The active scene plus whatever per-scene state it carries. Scenes 2
/// and 3 are pure projections of the shared data and carry none.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveScene {
    StateBreakdown(StateBreakdownState),
    CategoryTotals,
    DiscountScatter,
}

impl ActiveScene {
    fn enter(kind: SceneKind, summary: &ProfitSummary) -> Self {
        match kind {
            SceneKind::StateBreakdown => {
                ActiveScene::StateBreakdown(StateBreakdownState::enter(summary))
            }
            SceneKind::CategoryTotals => ActiveScene::CategoryTotals,
            SceneKind::DiscountScatter => ActiveScene::DiscountScatter,
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            ActiveScene::StateBreakdown(_) => SceneKind::StateBreakdown,
            ActiveScene::CategoryTotals => SceneKind::CategoryTotals,
            ActiveScene::DiscountScatter => SceneKind::DiscountScatter,
        }
    }
}

/// Bounded navigation over the fixed scene sequence. Owns the index
/// exclusively; it only ever changes through `next` and `previous`, and
/// every real transition tears the previous scene down and builds the new
/// one from scratch.
#[derive(Debug)]
pub struct SceneController {
    index: usize,
    pub active: ActiveScene,
}

impl SceneController {
    pub fn new(summary: &ProfitSummary) -> Self {
        Self {
            index: 0,
            active: ActiveScene::enter(SCENE_ORDER[0], summary),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> SceneKind {
        SCENE_ORDER[self.index]
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index < SCENE_COUNT - 1
    }

    pub fn indicator(&self) -> String {
        format!("Scene {} of {}", self.index + 1, SCENE_COUNT)
    }

    /// Advances one scene. A call at the last scene is a no-op: the index
    /// is unchanged and the active scene is not rebuilt. Returns whether a
    /// transition happened.
    pub fn next(&mut self, summary: &ProfitSummary) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.index += 1;
        self.transition(summary);
        true
    }

    /// Steps back one scene; a call at the first scene is a no-op.
    pub fn previous(&mut self, summary: &ProfitSummary) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        self.transition(summary);
        true
    }

    fn transition(&mut self, summary: &ProfitSummary) {
        self.active = ActiveScene::enter(SCENE_ORDER[self.index], summary);
        debug!(index = self.index, scene = self.kind().title(), "scene transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn summary() -> ProfitSummary {
        let records = vec![
            Record {
                state: "TX".to_string(),
                category: "Tech".to_string(),
                product_name: "Printer".to_string(),
                sales: 400.0,
                quantity: 2.0,
                discount: 0.0,
                profit: 100.0,
            },
            Record {
                state: "CA".to_string(),
                category: "Furn".to_string(),
                product_name: "Desk".to_string(),
                sales: 200.0,
                quantity: 1.0,
                discount: 0.2,
                profit: -20.0,
            },
        ];
        ProfitSummary::from_records(&records)
    }

    #[test]
    fn starts_at_scene_one_with_sorted_first_state_selected() {
        let summary = summary();
        let controller = SceneController::new(&summary);
        assert_eq!(controller.index(), 0);
        assert_eq!(controller.kind(), SceneKind::StateBreakdown);
        assert_eq!(
            controller.active,
            ActiveScene::StateBreakdown(StateBreakdownState {
                selected_state: Some("CA".to_string()),
            })
        );
    }

    #[test]
    fn navigation_clamps_at_the_bounds() {
        let summary = summary();
        let mut controller = SceneController::new(&summary);

        assert!(!controller.previous(&summary));
        assert_eq!(controller.index(), 0);

        assert!(controller.next(&summary));
        assert!(controller.next(&summary));
        assert_eq!(controller.index(), 2);

        assert!(!controller.next(&summary));
        assert_eq!(controller.index(), 2);
        assert_eq!(controller.kind(), SceneKind::DiscountScatter);
        assert_eq!(controller.active.kind(), controller.kind());
    }

    #[test]
    fn no_op_navigation_does_not_rebuild_the_scene() {
        let summary = summary();
        let mut controller = SceneController::new(&summary);

        // Mutate scene-local state, then hit the lower bound.
        if let ActiveScene::StateBreakdown(scene) = &mut controller.active {
            scene.selected_state = Some("TX".to_string());
        }
        assert!(!controller.previous(&summary));
        assert_eq!(
            controller.active,
            ActiveScene::StateBreakdown(StateBreakdownState {
                selected_state: Some("TX".to_string()),
            })
        );
    }

    #[test]
    fn selection_resets_when_scene_one_is_re_entered() {
        let summary = summary();
        let mut controller = SceneController::new(&summary);

        if let ActiveScene::StateBreakdown(scene) = &mut controller.active {
            scene.selected_state = Some("TX".to_string());
        }
        assert!(controller.next(&summary));
        assert!(controller.previous(&summary));

        assert_eq!(controller.kind(), SceneKind::StateBreakdown);
        assert_eq!(
            controller.active,
            ActiveScene::StateBreakdown(StateBreakdownState {
                selected_state: Some("CA".to_string()),
            })
        );
    }

    #[test]
    fn control_flags_follow_the_index() {
        let summary = summary();
        let mut controller = SceneController::new(&summary);

        assert!(!controller.can_go_previous());
        assert!(controller.can_go_next());
        assert_eq!(controller.indicator(), "Scene 1 of 3");

        controller.next(&summary);
        assert!(controller.can_go_previous());
        assert!(controller.can_go_next());
        assert_eq!(controller.indicator(), "Scene 2 of 3");

        controller.next(&summary);
        assert!(controller.can_go_previous());
        assert!(!controller.can_go_next());
        assert_eq!(controller.indicator(), "Scene 3 of 3");
    }

    #[test]
    fn empty_dataset_enters_scene_one_without_a_selection() {
        let summary = ProfitSummary::from_records(&[]);
        let controller = SceneController::new(&summary);
        assert_eq!(
            controller.active,
            ActiveScene::StateBreakdown(StateBreakdownState {
                selected_state: None,
            })
        );
    }
}
