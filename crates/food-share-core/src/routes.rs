//! Route Table and Guard
//!
//! Which views exist, which need a signed-in user, and where a blocked
//! navigation goes instead.

/// Application views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    AvailableFoods,
    FoodDetails(String),
    AddFood,
    ManageFoods,
    MyRequests,
    NotFound,
}

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/registration";
pub const AVAILABLE_FOODS: &str = "/available-foods";
pub const ADD_FOOD: &str = "/add-food";
pub const MANAGE_FOODS: &str = "/manage-foods";
pub const MY_REQUESTS: &str = "/my-requests";

impl Route {
    /// Resolve a browser path (query and fragment ignored)
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            LOGIN => Route::Login,
            REGISTER => Route::Register,
            AVAILABLE_FOODS => Route::AvailableFoods,
            ADD_FOOD => Route::AddFood,
            MANAGE_FOODS => Route::ManageFoods,
            MY_REQUESTS => Route::MyRequests,
            other => match other.strip_prefix("/food/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::FoodDetails(id.to_string()),
                _ => Route::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME.to_string(),
            Route::Login => LOGIN.to_string(),
            Route::Register => REGISTER.to_string(),
            Route::AvailableFoods => AVAILABLE_FOODS.to_string(),
            Route::FoodDetails(id) => food_details(id),
            Route::AddFood => ADD_FOOD.to_string(),
            Route::ManageFoods => MANAGE_FOODS.to_string(),
            Route::MyRequests => MY_REQUESTS.to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Views only reachable with a session
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::FoodDetails(_) | Route::AddFood | Route::ManageFoods | Route::MyRequests
        )
    }
}

pub fn food_details(id: &str) -> String {
    format!("/food/{}", id)
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send to login; `from` is where to return afterwards
    RedirectToLogin { from: String },
}

impl GuardDecision {
    /// Login URL carrying the origin
    pub fn login_url(&self) -> Option<String> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin { from } => Some(login_url_from(from)),
        }
    }
}

pub fn guard(path: &str, signed_in: bool) -> GuardDecision {
    if signed_in || !Route::from_path(path).is_protected() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin { from: path.to_string() }
    }
}

pub fn login_url_from(from: &str) -> String {
    format!("{}?from={}", LOGIN, from)
}

/// Where login should land. Only same-site paths are honoured.
pub fn login_redirect_target(from: Option<&str>) -> String {
    match from {
        Some(path) if is_same_site_path(path) && path != LOGIN => path.to_string(),
        _ => HOME.to_string(),
    }
}

/// Browsers treat `\` like `/`, so `/\host` is protocol-relative too
fn is_same_site_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
        && !path.split(['?', '#']).next().unwrap_or_default().contains(':')
}

/// Header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub private: bool,
}

pub const NAV_MENU: &[NavItem] = &[
    NavItem { name: "Home", path: HOME, private: false },
    NavItem { name: "Available Foods", path: AVAILABLE_FOODS, private: false },
    NavItem { name: "Add Food", path: ADD_FOOD, private: true },
    NavItem { name: "Manage My Foods", path: MANAGE_FOODS, private: true },
    NavItem { name: "My Food Request", path: MY_REQUESTS, private: true },
];

pub fn visible_menu(signed_in: bool) -> Vec<NavItem> {
    NAV_MENU.iter().copied().filter(|item| signed_in || !item.private).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/manage-foods/"), Route::ManageFoods);
        assert_eq!(Route::from_path("/login?from=/add-food"), Route::Login);
        assert_eq!(Route::from_path("/food/65a1"), Route::FoodDetails("65a1".into()));
        assert_eq!(Route::from_path("/food/"), Route::NotFound);
        assert_eq!(Route::from_path("/food/a/b"), Route::NotFound);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::AddFood, Route::FoodDetails("x1".into()), Route::MyRequests] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_protected_views() {
        assert_eq!(guard("/available-foods", false), GuardDecision::Allow);
        assert_eq!(guard("/add-food", true), GuardDecision::Allow);

        let decision = guard("/food/42", false);
        assert_eq!(decision, GuardDecision::RedirectToLogin { from: "/food/42".into() });
        assert_eq!(decision.login_url().as_deref(), Some("/login?from=/food/42"));

        for path in [ADD_FOOD, MANAGE_FOODS, MY_REQUESTS] {
            assert!(matches!(guard(path, false), GuardDecision::RedirectToLogin { .. }));
        }
    }

    #[test]
    fn test_login_redirect_target() {
        assert_eq!(login_redirect_target(Some("/my-requests")), "/my-requests");
        assert_eq!(login_redirect_target(None), "/");
        assert_eq!(login_redirect_target(Some("https://evil.example")), "/");
        assert_eq!(login_redirect_target(Some("//evil.example")), "/");
        assert_eq!(login_redirect_target(Some("/login")), "/");
        assert_eq!(login_redirect_target(Some("/\\evil.example")), "/");
        assert_eq!(login_redirect_target(Some("/food/1\\x")), "/");
        assert_eq!(login_redirect_target(Some("/\t/evil.example")), "/");
        assert_eq!(login_redirect_target(Some("/javascript:alert(1)")), "/");
        assert_eq!(login_redirect_target(Some("/food/42?tab=a:b")), "/food/42?tab=a:b");
    }

    #[test]
    fn test_menu_hides_private_entries() {
        assert_eq!(visible_menu(false).len(), 2);
        assert_eq!(visible_menu(true).len(), NAV_MENU.len());
        assert!(visible_menu(false).iter().all(|item| !item.private));
    }
}
