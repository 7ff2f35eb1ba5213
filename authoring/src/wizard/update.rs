use common::model::guide::CategorySnapshot;

use crate::draft::ImageSource;
use crate::modal::Modal;

use super::messages::Msg;
use super::state::{GuideWizard, STEP_REVIEW};

/// Central update function for the wizard. Mutates the state based on `msg`
/// and returns whether the view should re-render.
pub fn update(wizard: &mut GuideWizard, msg: Msg) -> bool {
    match msg {
        Msg::SetTitle(title) => {
            wizard.draft.title = title;
            true
        }
        Msg::SetDescription(description) => {
            wizard.draft.description = description;
            true
        }
        Msg::SetColor(color) => {
            wizard.draft.color = color;
            true
        }
        Msg::SetPopular(popular) => {
            wizard.draft.is_popular = popular;
            true
        }
        Msg::AttachImage { filename, bytes } => {
            wizard.draft.image = ImageSource::Pending { filename, bytes };
            true
        }
        Msg::SetImageUrl(url) => {
            wizard.draft.image = ImageSource::Url(url);
            true
        }
        Msg::ClearImage => {
            wizard.draft.image = ImageSource::Unset;
            true
        }

        Msg::AddKeyword(keyword) => {
            let keyword = keyword.trim().to_string();
            if keyword.is_empty() || wizard.draft.keywords.contains(&keyword) {
                return false;
            }
            wizard.draft.keywords.push(keyword);
            true
        }
        Msg::RemoveKeyword(index) => {
            if index >= wizard.draft.keywords.len() {
                return false;
            }
            wizard.draft.keywords.remove(index);
            true
        }

        Msg::ToggleCategory(id) => {
            if let Some(position) = wizard.draft.category_ids.iter().position(|c| *c == id) {
                wizard.draft.category_ids.remove(position);
            } else {
                wizard.draft.category_ids.push(id);
            }
            true
        }
        Msg::CategoryCreated(category) => {
            wizard.categories.insert(CategorySnapshot {
                id: category.id.clone(),
                title: category.title.clone(),
                color: category.color.clone(),
            });
            if !wizard.draft.category_ids.contains(&category.id) {
                wizard.draft.category_ids.push(category.id);
            }
            wizard.modal = Some(Modal::success("Category created", true));
            true
        }

        Msg::SetOverviewText(text) => {
            wizard.draft.overview_text = text;
            true
        }
        Msg::AddOverviewBullet(bullet) => {
            wizard.draft.overview_bullets.push(bullet);
            true
        }
        Msg::SetOverviewBullet(index, bullet) => {
            match wizard.draft.overview_bullets.get_mut(index) {
                Some(slot) => {
                    *slot = bullet;
                    true
                }
                None => false,
            }
        }
        Msg::RemoveOverviewBullet(index) => {
            if index >= wizard.draft.overview_bullets.len() {
                return false;
            }
            wizard.draft.overview_bullets.remove(index);
            true
        }

        Msg::AddModule(module) => {
            wizard.draft.modules.push(module);
            true
        }
        Msg::ReplaceModule(index, module) => match wizard.draft.modules.get_mut(index) {
            Some(slot) => {
                *slot = module;
                true
            }
            None => false,
        },
        Msg::RemoveModule(index) => {
            if index >= wizard.draft.modules.len() {
                return false;
            }
            wizard.draft.modules.remove(index);
            true
        }

        Msg::Advance => {
            let missing = wizard.missing_for_step(wizard.step);
            if !missing.is_empty() {
                wizard.modal = Some(Modal::error(
                    "Missing required fields",
                    missing.join("\n"),
                ));
                return true;
            }
            if wizard.step < STEP_REVIEW {
                wizard.step += 1;
            }
            true
        }
        Msg::Retreat => {
            if wizard.step == 0 {
                return false;
            }
            wizard.step -= 1;
            true
        }
        Msg::DismissModal => {
            wizard.modal = None;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use common::model::guide::{Module, ModuleContent};

    use super::*;
    use crate::category_index::CategoryIndex;
    use crate::wizard::{STEP_BASIC_INFO, STEP_MODULES, STEP_REVIEW};

    fn wizard() -> GuideWizard {
        GuideWizard::new(CategoryIndex::default())
    }

    fn module(title: &str) -> Module {
        Module {
            title: title.to_string(),
            locked: false,
            content: ModuleContent::default(),
            questions: Vec::new(),
        }
    }

    fn fill_basic_info(w: &mut GuideWizard) {
        update(w, Msg::SetTitle("T".to_string()));
        update(w, Msg::SetDescription("D".to_string()));
        update(w, Msg::SetImageUrl("/storage/img.png".to_string()));
    }

    #[test]
    fn advance_with_empty_step_enumerates_every_missing_field() {
        let mut w = wizard();
        update(&mut w, Msg::Advance);

        assert_eq!(w.step, STEP_BASIC_INFO);
        match w.modal.as_ref().expect("modal shown") {
            Modal::Error { title, message } => {
                assert_eq!(title, "Missing required fields");
                assert_eq!(message, "Title\nDescription\nImage");
            }
            other => panic!("expected error modal, got {other:?}"),
        }
    }

    #[test]
    fn advance_reports_partial_missing_fields_only() {
        let mut w = wizard();
        update(&mut w, Msg::SetTitle("T".to_string()));
        update(&mut w, Msg::Advance);

        assert_eq!(w.step, STEP_BASIC_INFO);
        match w.modal.as_ref().expect("modal shown") {
            Modal::Error { message, .. } => {
                assert_eq!(message, "Description\nImage");
            }
            other => panic!("expected error modal, got {other:?}"),
        }
    }

    #[test]
    fn each_step_validates_only_its_own_fields() {
        let mut w = wizard();
        fill_basic_info(&mut w);
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, 1);

        // Step 1 requires a keyword even though later steps are also empty.
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, 1);
        match w.modal.as_ref().expect("modal shown") {
            Modal::Error { message, .. } => assert_eq!(message, "At least one keyword"),
            other => panic!("expected error modal, got {other:?}"),
        }

        update(&mut w, Msg::AddKeyword("k".to_string()));
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, 2);

        update(&mut w, Msg::SetOverviewText("O".to_string()));
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, 3);

        update(&mut w, Msg::AddModule(module("M")));
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, STEP_REVIEW);

        // No step gate past review.
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, STEP_REVIEW);
    }

    #[test]
    fn retreat_at_step_zero_is_a_no_op() {
        let mut w = wizard();
        assert!(!update(&mut w, Msg::Retreat));
        assert_eq!(w.step, 0);
    }

    #[test]
    fn module_gate_requires_at_least_one_module() {
        let mut w = wizard();
        w.step = STEP_MODULES;
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, STEP_MODULES);

        update(&mut w, Msg::AddModule(module("M")));
        w.modal = None;
        update(&mut w, Msg::Advance);
        assert_eq!(w.step, STEP_REVIEW);
    }

    #[test]
    fn keywords_are_trimmed_and_deduplicated() {
        let mut w = wizard();
        assert!(update(&mut w, Msg::AddKeyword(" prompts ".to_string())));
        assert!(!update(&mut w, Msg::AddKeyword("prompts".to_string())));
        assert!(!update(&mut w, Msg::AddKeyword("   ".to_string())));
        assert_eq!(w.draft.keywords, vec!["prompts".to_string()]);
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut w = wizard();
        update(&mut w, Msg::ToggleCategory("c1".to_string()));
        assert_eq!(w.draft.category_ids, vec!["c1".to_string()]);
        update(&mut w, Msg::ToggleCategory("c1".to_string()));
        assert!(w.draft.category_ids.is_empty());
    }

    #[test]
    fn category_created_joins_index_and_selection() {
        use common::model::category::Category;

        let mut w = wizard();
        update(
            &mut w,
            Msg::CategoryCreated(Category {
                id: "c9".to_string(),
                title: "New".to_string(),
                description: "d".to_string(),
                icon_url: "i.png".to_string(),
                color: "#abcdef".to_string(),
                featured: false,
                coming_soon: false,
                guides: Vec::new(),
                created_at: String::new(),
            }),
        );

        assert!(w.categories.get("c9").is_some());
        assert_eq!(w.draft.category_ids, vec!["c9".to_string()]);
        assert_eq!(w.modal, Some(Modal::success("Category created", true)));
    }

    #[test]
    fn replace_module_preserves_position() {
        let mut w = wizard();
        update(&mut w, Msg::AddModule(module("a")));
        update(&mut w, Msg::AddModule(module("b")));
        update(&mut w, Msg::ReplaceModule(0, module("a2")));
        assert_eq!(w.draft.modules[0].title, "a2");
        assert_eq!(w.draft.modules[1].title, "b");
        assert!(!update(&mut w, Msg::ReplaceModule(5, module("x"))));
    }
}
