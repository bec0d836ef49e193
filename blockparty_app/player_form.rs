use crate::{
    cqrs::commands::{AddPlayer, UpdatePlayer},
    normalize::{normalize, resolve_score},
};

/// Raw fields posted by the admin page. The add form uses the `new_*`
/// fields, the update form the `update_*` ones.
#[derive(Debug, Clone, Default)]
pub struct PlayerForm {
    pub new_player_id: Option<String>,
    pub new_players_name: Option<String>,
    pub new_profile_photo: Option<String>,
    pub new_total_score: Option<String>,
    pub update_player_id: Option<String>,
    pub update_players_name: Option<String>,
    pub update_profile_photo: Option<String>,
    pub update_total_score: Option<String>,
}

/// Builds a form from decoded key/value pairs. A repeated key keeps its
/// first value and unknown keys are ignored.
impl FromIterator<(String, String)> for PlayerForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = PlayerForm::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "new_player_id" => &mut form.new_player_id,
                "new_players_name" => &mut form.new_players_name,
                "new_profile_photo" => &mut form.new_profile_photo,
                "new_total_score" => &mut form.new_total_score,
                "update_player_id" => &mut form.update_player_id,
                "update_players_name" => &mut form.update_players_name,
                "update_profile_photo" => &mut form.update_profile_photo,
                "update_total_score" => &mut form.update_total_score,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }
}

/// What a submitted admin form asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerMutation {
    Add(AddPlayer),
    Update(UpdatePlayer),
    None,
}

impl PlayerForm {
    /// A non-empty `new_player_id` selects an add, otherwise a non-empty
    /// `update_player_id` selects an update. `new_*` values win over
    /// `update_*` values for every other field.
    pub fn into_mutation(self) -> PlayerMutation {
        let players_name = normalize(first_filled(&self.new_players_name, &self.update_players_name));
        let profile_photo =
            normalize(first_filled(&self.new_profile_photo, &self.update_profile_photo));
        let total_score =
            resolve_score(first_filled(&self.new_total_score, &self.update_total_score));

        let new_player_id = normalize(self.new_player_id.as_deref());
        if !new_player_id.is_empty() {
            return PlayerMutation::Add(AddPlayer {
                player_id: new_player_id,
                players_name,
                profile_photo,
                total_score,
            });
        }

        let update_player_id = normalize(self.update_player_id.as_deref());
        if !update_player_id.is_empty() {
            return PlayerMutation::Update(UpdatePlayer {
                player_id: update_player_id,
                players_name,
                profile_photo,
                total_score,
            });
        }

        PlayerMutation::None
    }
}

fn first_filled<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> Option<&'a str> {
    primary
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .or(fallback.as_deref())
}
