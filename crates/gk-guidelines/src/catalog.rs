// catalog.rs — The ordered guideline catalog.
//
// The catalog is a fixed ordered list of named slots, built once at process
// start and consumed read-only. Ordinal position matters only for report
// ordering: predicates are independent and side-effect-free, so resolution
// never short-circuits and every slot yields a result even when earlier
// slots already failed.
//
// Slot numbering is stable across releases. Retired or deferred rules stay
// in the catalog as Disabled slots (always auto-passing) so that slot
// numbers in old review comments keep meaning the same thing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::check::{EvaluationContext, GuidelineCheck};
use crate::exemption::ExemptionDecision;
use crate::result::GuidelineResult;

/// When a slot's predicate actually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    /// Evaluated on every run.
    Always,
    /// Auto-passes when the generated-package exemption was granted.
    UnlessExempt,
    /// Evaluated only for generated-pattern submissions; auto-passes
    /// otherwise.
    GeneratedOnly,
    /// Never evaluated; always auto-passes. Kept for numbering stability.
    Disabled,
}

/// Evaluation phase of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Cheap, local checks over the submission and registry snapshot.
    Static,
    /// Expensive checks that may install and load the proposed version.
    Dynamic,
}

/// One named slot in the catalog.
pub struct GuidelineSlot {
    /// Position in the catalog; assigned by [`Catalog`] construction.
    pub index: usize,
    /// Stable identifier, used in results and reports.
    pub name: &'static str,
    pub applicability: Applicability,
    pub phase: Phase,
    /// The externally supplied predicate. `None` means the rule is not
    /// implemented yet and the slot auto-passes (Disabled slots always
    /// carry `None`).
    check: Option<Box<dyn GuidelineCheck>>,
}

impl GuidelineSlot {
    /// An active slot backed by a predicate.
    pub fn active(
        name: &'static str,
        applicability: Applicability,
        phase: Phase,
        check: Box<dyn GuidelineCheck>,
    ) -> Self {
        Self {
            index: 0,
            name,
            applicability,
            phase,
            check: Some(check),
        }
    }

    /// A disabled slot, retained for numbering stability.
    pub fn disabled(name: &'static str, phase: Phase) -> Self {
        Self {
            index: 0,
            name,
            applicability: Applicability::Disabled,
            phase,
            check: None,
        }
    }

    /// Resolve this slot to a result for one run.
    ///
    /// Disabled, exempted, and not-applicable slots auto-pass with an empty
    /// message — the report only ever quotes failing slots.
    fn resolve(
        &self,
        cx: &EvaluationContext<'_>,
        exemption: &ExemptionDecision,
        is_generated: bool,
    ) -> GuidelineResult {
        let evaluate = match self.applicability {
            Applicability::Always => true,
            Applicability::UnlessExempt => !exemption.granted,
            Applicability::GeneratedOnly => is_generated,
            Applicability::Disabled => false,
        };

        let outcome = match (&self.check, evaluate) {
            (Some(check), true) => check.evaluate(cx),
            // Unimplemented or skipped rules auto-pass.
            _ => crate::check::CheckOutcome::pass(),
        };

        if !outcome.passed {
            tracing::debug!(slot = self.name, message = %outcome.message, "guideline failed");
        }

        GuidelineResult {
            index: self.index,
            name: self.name.to_string(),
            passed: outcome.passed,
            message: outcome.message,
        }
    }
}

impl fmt::Debug for GuidelineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuidelineSlot")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("applicability", &self.applicability)
            .field("phase", &self.phase)
            .field("has_check", &self.check.is_some())
            .finish()
    }
}

/// The predicates an embedding process supplies for the standard catalog.
///
/// Each field backs exactly one slot; see [`Catalog::standard`] for the
/// slot table. Predicates are external collaborators — this crate defines
/// only how they are sequenced and reported.
pub struct StandardChecks {
    /// Identity capitalization/format rule.
    pub name_capitalization: Box<dyn GuidelineCheck>,
    /// Minimum identity length rule.
    pub name_length: Box<dyn GuidelineCheck>,
    /// Disallowed substrings and prefixes in the identity.
    pub name_restrictions: Box<dyn GuidelineCheck>,
    /// Every runtime dependency carries a version-constraint entry.
    pub compat_bounds: Box<dyn GuidelineCheck>,
    /// Generated packages may depend only on the fixed allow-list.
    pub generated_dependencies: Box<dyn GuidelineCheck>,
    /// Identity must not be confusable with any existing package name.
    pub name_distance: Box<dyn GuidelineCheck>,
    /// Identity charset validity.
    pub name_charset: Box<dyn GuidelineCheck>,
    /// The submission changes only the expected set of files.
    pub changed_files: Box<dyn GuidelineCheck>,
    /// The proposed version resolves and installs against the registry.
    pub version_installable: Box<dyn GuidelineCheck>,
    /// The installed version's code loads successfully.
    pub version_loadable: Box<dyn GuidelineCheck>,
}

/// The immutable ordered guideline catalog.
pub struct Catalog {
    slots: Vec<GuidelineSlot>,
}

impl Catalog {
    /// The standard catalog, wiring collaborator predicates into the fixed
    /// slot table:
    ///
    /// | # | name                   | applicability | phase   |
    /// |---|------------------------|---------------|---------|
    /// | 0 | name-capitalization    | UnlessExempt  | Static  |
    /// | 1 | name-length            | UnlessExempt  | Static  |
    /// | 2 | name-restrictions      | Always        | Static  |
    /// | 3 | compat-bounds          | Always        | Static  |
    /// | 4 | generated-dependencies | GeneratedOnly | Static  |
    /// | 5 | name-distance          | Always        | Static  |
    /// | 6 | name-charset           | Always        | Static  |
    /// | 7 | changed-files          | Always        | Static  |
    /// | 8 | single-registry-entry  | Disabled      | Static  |
    /// | 9 | sequential-version     | Disabled      | Static  |
    /// |10 | version-installable    | Always        | Dynamic |
    /// |11 | version-loadable       | Always        | Dynamic |
    pub fn standard(checks: StandardChecks) -> Self {
        Self::from_slots(vec![
            GuidelineSlot::active(
                "name-capitalization",
                Applicability::UnlessExempt,
                Phase::Static,
                checks.name_capitalization,
            ),
            GuidelineSlot::active(
                "name-length",
                Applicability::UnlessExempt,
                Phase::Static,
                checks.name_length,
            ),
            GuidelineSlot::active(
                "name-restrictions",
                Applicability::Always,
                Phase::Static,
                checks.name_restrictions,
            ),
            GuidelineSlot::active(
                "compat-bounds",
                Applicability::Always,
                Phase::Static,
                checks.compat_bounds,
            ),
            GuidelineSlot::active(
                "generated-dependencies",
                Applicability::GeneratedOnly,
                Phase::Static,
                checks.generated_dependencies,
            ),
            GuidelineSlot::active(
                "name-distance",
                Applicability::Always,
                Phase::Static,
                checks.name_distance,
            ),
            GuidelineSlot::active(
                "name-charset",
                Applicability::Always,
                Phase::Static,
                checks.name_charset,
            ),
            GuidelineSlot::active(
                "changed-files",
                Applicability::Always,
                Phase::Static,
                checks.changed_files,
            ),
            GuidelineSlot::disabled("single-registry-entry", Phase::Static),
            GuidelineSlot::disabled("sequential-version", Phase::Static),
            GuidelineSlot::active(
                "version-installable",
                Applicability::Always,
                Phase::Dynamic,
                checks.version_installable,
            ),
            GuidelineSlot::active(
                "version-loadable",
                Applicability::Always,
                Phase::Dynamic,
                checks.version_loadable,
            ),
        ])
    }

    /// Build a catalog from explicit slots, assigning ordinal indices.
    ///
    /// Used by tests and non-standard deployments; `standard()` is the
    /// production constructor. Every static slot must precede every dynamic
    /// slot: results are collected phase by phase, so an interleaved catalog
    /// would report in a different order than it declares.
    pub fn from_slots(slots: Vec<GuidelineSlot>) -> Self {
        let slots: Vec<GuidelineSlot> = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| GuidelineSlot { index, ..slot })
            .collect();
        debug_assert!(
            slots
                .windows(2)
                .all(|pair| !(pair[0].phase == Phase::Dynamic && pair[1].phase == Phase::Static)),
            "static slots must precede dynamic slots so report order equals catalog order"
        );
        Self { slots }
    }

    pub fn slots(&self) -> &[GuidelineSlot] {
        &self.slots
    }

    /// Resolve every slot of one phase, in catalog order.
    ///
    /// Never short-circuits: each slot yields a result regardless of what
    /// earlier slots decided.
    pub fn evaluate_phase(
        &self,
        phase: Phase,
        cx: &EvaluationContext<'_>,
        exemption: &ExemptionDecision,
        is_generated: bool,
    ) -> Vec<GuidelineResult> {
        self.slots
            .iter()
            .filter(|slot| slot.phase == phase)
            .map(|slot| slot.resolve(cx, exemption, is_generated))
            .collect()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").field("slots", &self.slots).finish()
    }
}
