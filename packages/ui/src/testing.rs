//! Scripted in-memory [`RecipeApi`] for controller tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use api::{ApiError, AuthResponse, LoginRequest, Recipe, RecipeApi, RegisterRequest, UserInfo};

pub fn user(id: &str) -> UserInfo {
    UserInfo {
        id: id.to_string(),
        username: "mei".to_string(),
        role: "user".to_string(),
        profile_image: None,
        bio: None,
    }
}

pub fn recipe(id: &str, title: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        ..Recipe::default()
    }
}

#[derive(Default)]
struct State {
    recipes: Vec<Recipe>,
    offline: bool,
    auth_rejection: Option<Option<String>>,
    fail_recipes: bool,
    fail_profile: bool,
    fail_delete: bool,
    health_failures: usize,
    calls: HashMap<&'static str, usize>,
    last_login_email: Option<String>,
    last_register_username: Option<String>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<State>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(self, recipes: Vec<Recipe>) -> Self {
        self.state.borrow_mut().recipes = recipes;
        self
    }

    pub fn offline(self) -> Self {
        self.state.borrow_mut().offline = true;
        self
    }

    pub fn reject_auth(self, message: Option<&str>) -> Self {
        self.state.borrow_mut().auth_rejection = Some(message.map(str::to_string));
        self
    }

    pub fn fail_recipes(self) -> Self {
        self.state.borrow_mut().fail_recipes = true;
        self
    }

    pub fn fail_profile(self) -> Self {
        self.state.borrow_mut().fail_profile = true;
        self
    }

    pub fn fail_delete(self) -> Self {
        self.state.borrow_mut().fail_delete = true;
        self
    }

    /// Fail the first `n` health probes.
    pub fn health_failures(self, n: usize) -> Self {
        self.state.borrow_mut().health_failures = n;
        self
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.state.borrow().calls.get(endpoint).copied().unwrap_or(0)
    }

    pub fn last_login_email(&self) -> Option<String> {
        self.state.borrow().last_login_email.clone()
    }

    pub fn last_register_username(&self) -> Option<String> {
        self.state.borrow().last_register_username.clone()
    }

    fn record(&self, endpoint: &'static str) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        *state.calls.entry(endpoint).or_default() += 1;
        if state.offline {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    fn auth_result(&self, token: &str, message: Option<&str>) -> Result<AuthResponse, ApiError> {
        if let Some(rejection) = self.state.borrow().auth_rejection.clone() {
            return Err(ApiError::Rejected {
                status: 400,
                message: rejection,
            });
        }
        Ok(AuthResponse {
            token: token.to_string(),
            user: user("u1"),
            message: message.map(str::to_string),
        })
    }
}

fn server_error() -> ApiError {
    ApiError::Rejected {
        status: 500,
        message: Some("Server error".to_string()),
    }
}

impl RecipeApi for FakeApi {
    async fn health(&self) -> Result<(), ApiError> {
        self.record("health")?;
        let mut state = self.state.borrow_mut();
        if state.health_failures > 0 {
            state.health_failures -= 1;
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        Ok(())
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record("login")?;
        self.state.borrow_mut().last_login_email = Some(request.email);
        self.auth_result("tok-login", Some("Welcome back"))
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record("register")?;
        self.state.borrow_mut().last_register_username = Some(request.username);
        self.auth_result("tok-register", None)
    }

    async fn profile(&self, _token: &str) -> Result<UserInfo, ApiError> {
        self.record("profile")?;
        if self.state.borrow().fail_profile {
            return Err(server_error());
        }
        let mut profile = user("u1");
        profile.bio = Some("Loves noodles".to_string());
        Ok(profile)
    }

    async fn recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.record("recipes")?;
        let state = self.state.borrow();
        if state.fail_recipes {
            return Err(server_error());
        }
        Ok(state.recipes.clone())
    }

    async fn delete_recipe(&self, _token: &str, id: &str) -> Result<(), ApiError> {
        self.record("delete")?;
        let mut state = self.state.borrow_mut();
        if state.fail_delete {
            return Err(server_error());
        }
        state.recipes.retain(|r| r.id != id);
        Ok(())
    }
}
