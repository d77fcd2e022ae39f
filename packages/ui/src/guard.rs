//! Page roles and the route guard.
//!
//! Each routed page maps to one [`PageRole`]. The guard decides, from the
//! cached session alone, whether a page may render or must redirect.

/// What kind of page is being shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageRole {
    Home,
    Recipes,
    RecipeDetail,
    Login,
    Register,
    Dashboard,
    Profile,
}

impl PageRole {
    /// Pages that need a signed-in user.
    pub fn requires_session(self) -> bool {
        matches!(self, PageRole::Dashboard | PageRole::Profile)
    }

    /// Pages a signed-in user has no reason to see.
    pub fn guest_only(self) -> bool {
        matches!(self, PageRole::Login | PageRole::Register)
    }

    /// Where to send the visitor instead, if anywhere.
    pub fn redirect(self, signed_in: bool) -> Option<PageRole> {
        if !signed_in && self.requires_session() {
            Some(PageRole::Login)
        } else if signed_in && self.guest_only() {
            Some(PageRole::Dashboard)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageRole::Home => "Home",
            PageRole::Recipes | PageRole::RecipeDetail => "Recipes",
            PageRole::Login => "Login",
            PageRole::Register => "Register",
            PageRole::Dashboard => "Dashboard",
            PageRole::Profile => "Profile",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            PageRole::Home => "/",
            PageRole::Recipes | PageRole::RecipeDetail => "/recipes",
            PageRole::Login => "/login",
            PageRole::Register => "/register",
            PageRole::Dashboard => "/dashboard",
            PageRole::Profile => "/profile",
        }
    }

    /// Whether a navbar link to `self` should be marked active on `current`.
    pub fn is_active_on(self, current: PageRole) -> bool {
        match self {
            PageRole::Recipes => matches!(current, PageRole::Recipes | PageRole::RecipeDetail),
            other => other == current,
        }
    }
}

/// Primary navbar links, in display order.
pub const NAV_LINKS: [PageRole; 3] = [PageRole::Home, PageRole::Recipes, PageRole::Dashboard];
