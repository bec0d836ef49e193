use askama::Template;

/// One leaderboard line. `total_score` is already formatted, "-" when unset.
#[derive(Debug)]
pub struct LeaderboardRow<'a> {
    pub rank: usize,
    pub profile_photo: &'a str,
    pub players_name: &'a str,
    pub total_score: String,
}

/// Template for the public leaderboard.
#[derive(Debug, Template)]
#[template(path = "leaderboard.html")]
pub struct LeaderboardTemplate<'a> {
    pub banner_url: &'a str,
    pub rows: Vec<LeaderboardRow<'a>>,
}

#[derive(Debug)]
pub struct PlayerOption<'a> {
    pub player_id: &'a str,
    pub players_name: &'a str,
    pub selected: bool,
}

/// Values shown in the update form.
#[derive(Debug)]
pub struct SelectedPlayer<'a> {
    pub player_id: &'a str,
    pub players_name: &'a str,
    pub profile_photo: &'a str,
    pub total_score: i64,
}

/// Template for the admin page.
#[derive(Debug, Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate<'a> {
    pub options: Vec<PlayerOption<'a>>,
    pub selected: Option<SelectedPlayer<'a>>,
}

#[derive(Debug, Default, Template)]
#[template(path = "delete_form.html")]
pub struct DeleteFormTemplate {}

#[derive(Debug, Template)]
#[template(path = "delete_confirmation.html")]
pub struct DeleteConfirmationTemplate<'a> {
    pub player_id: &'a str,
}
