use crate::app::prefs::Lang;

/// Every user-facing string of the dashboard, per language. Widgets never
/// hold literals of their own.
#[derive(Debug)]
pub struct Strings {
    pub now_title: &'static str,
    pub swell_title: &'static str,
    pub tide_title: &'static str,
    pub weekly_title: &'static str,
    pub session_title: &'static str,
    pub picker_title: &'static str,
    pub wave_height: &'static str,
    pub wave_period: &'static str,
    pub wave_direction: &'static str,
    pub wind_wave_peak: &'static str,
    pub high_tide: &'static str,
    pub low_tide: &'static str,
    pub no_data: &'static str,
    pub loading: &'static str,
    pub too_small: &'static str,
    pub stale_badge: &'static str,
    pub offline_badge: &'static str,
    pub signed_in_as: &'static str,
    pub signed_out: &'static str,
    pub email_label: &'static str,
    pub password_label: &'static str,
    pub login_action: &'static str,
    pub register_action: &'static str,
    pub auth_hint: &'static str,
    pub picker_hint: &'static str,
    pub key_hints: &'static str,
}

static FR: Strings = Strings {
    now_title: "Conditions actuelles",
    swell_title: "Houle 24 h",
    tide_title: "Marée",
    weekly_title: "Prévisions 7 jours",
    session_title: "Compte",
    picker_title: "Choisir un spot",
    wave_height: "Hauteur",
    wave_period: "Période",
    wave_direction: "Direction",
    wind_wave_peak: "Mer de vent",
    high_tide: "PM",
    low_tide: "BM",
    no_data: "Pas de données",
    loading: "Chargement...",
    too_small: "Terminal trop petit. Agrandissez à 40x18 minimum.",
    stale_badge: "⚠ périmé",
    offline_badge: "⚠ hors ligne",
    signed_in_as: "Connecté :",
    signed_out: "Non connecté",
    email_label: "E-mail",
    password_label: "Mot de passe",
    login_action: "Connexion",
    register_action: "Inscription",
    auth_hint: "Tab champ · Entrée valider · Ctrl-R mode · Échap fermer",
    picker_hint: "Tapez pour filtrer · ↑↓ choisir · Entrée valider",
    key_hints: "s spot · f favori · a compte · t thème · l langue · r actualiser · q quitter",
};

static EN: Strings = Strings {
    now_title: "Current conditions",
    swell_title: "Swell 24 h",
    tide_title: "Tide",
    weekly_title: "7-day outlook",
    session_title: "Account",
    picker_title: "Pick a spot",
    wave_height: "Height",
    wave_period: "Period",
    wave_direction: "Direction",
    wind_wave_peak: "Wind waves",
    high_tide: "HW",
    low_tide: "LW",
    no_data: "No data",
    loading: "Loading...",
    too_small: "Terminal too small. Resize to at least 40x18.",
    stale_badge: "⚠ stale",
    offline_badge: "⚠ offline",
    signed_in_as: "Signed in:",
    signed_out: "Signed out",
    email_label: "Email",
    password_label: "Password",
    login_action: "Log in",
    register_action: "Register",
    auth_hint: "Tab field · Enter submit · Ctrl-R mode · Esc close",
    picker_hint: "Type to filter · ↑↓ select · Enter confirm",
    key_hints: "s spot · f favourite · a account · t theme · l language · r refresh · q quit",
};

#[must_use]
pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::Fr => &FR,
        Lang::En => &EN,
    }
}
