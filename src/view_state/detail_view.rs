//! Projection of detail-loader state into the detail screen's fields.

use crate::catalog::DetailState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewState {
    pub title: String,
    /// Stat block, or a loading placeholder until the detail arrives.
    pub body: String,
    pub sprite_url: Option<String>,
    pub loading: bool,
    pub error_text: Option<String>,
}

impl DetailViewState {
    pub fn project(state: &DetailState) -> Self {
        let title = match (&state.detail, &state.target) {
            (Some(detail), _) => detail.display_name(),
            (None, Some(target)) => target.display_name(),
            (None, None) => "Detail".to_string(),
        };

        let body = match &state.detail {
            Some(detail) => format!(
                "#{}\n\nHeight: {} dm\nWeight: {} hg\nTypes: {}",
                detail.id,
                detail.height,
                detail.weight,
                detail.types_line()
            ),
            None => "Loading...".to_string(),
        };

        Self {
            title,
            body,
            sprite_url: state
                .detail
                .as_ref()
                .and_then(|d| d.sprites.front_default.clone()),
            loading: state.loading,
            error_text: state.last_error.as_ref().map(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Pokemon, PokemonDetail, Sprites, TypeRef, TypeSlot};

    fn sample_detail() -> PokemonDetail {
        PokemonDetail {
            id: 25,
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            types: vec![TypeSlot {
                slot: 1,
                type_ref: TypeRef {
                    name: "electric".to_string(),
                    url: String::new(),
                },
            }],
            sprites: Sprites {
                front_default: Some("https://sprites.test/25.png".to_string()),
            },
        }
    }

    #[test]
    fn loaded_detail_projects_stat_block() {
        let state = DetailState {
            target: None,
            detail: Some(sample_detail()),
            loading: false,
            last_error: None,
        };
        let view = DetailViewState::project(&state);
        assert_eq!(view.title, "Pikachu");
        assert!(view.body.contains("#25"));
        assert!(view.body.contains("Height: 4 dm"));
        assert!(view.body.contains("Weight: 60 hg"));
        assert!(view.body.contains("Types: Electric"));
        assert_eq!(view.sprite_url.as_deref(), Some("https://sprites.test/25.png"));
    }

    #[test]
    fn pending_detail_falls_back_to_target_name_and_placeholder() {
        let state = DetailState {
            target: Some(Pokemon {
                name: "pikachu".to_string(),
                url: String::new(),
            }),
            detail: None,
            loading: true,
            last_error: None,
        };
        let view = DetailViewState::project(&state);
        assert_eq!(view.title, "Pikachu");
        assert_eq!(view.body, "Loading...");
        assert!(view.loading);
    }
}
