use dioxus::prelude::*;

use store::{PortalConfig, Role};
use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{
    AddNote, AddPosting, AddRecipe, AddStudent, AppShell, EditNote, EditPosting, EditRecipe,
    EditStudent, Home, Login, NotFound, NoteDetail, Notes, PostingDetail, Postings, Protected,
    PublicOnly, RecipeDetail, Recipes, Register, Students,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicOnly)]
        #[route("/login?:redirect")]
        Login { redirect: String },
        #[route("/register")]
        Register {},
    #[end_layout]

    #[layout(Protected)]
    #[layout(AppShell)]
        #[route("/")]
        Home {},

        #[route("/mahasiswa")]
        Students {},
        #[route("/mahasiswa/add")]
        AddStudent {},
        #[route("/mahasiswa/edit/:id")]
        EditStudent { id: String },

        #[route("/recipes")]
        Recipes {},
        #[route("/add-recipe")]
        AddRecipe {},
        #[route("/recipes/:id")]
        RecipeDetail { id: String },
        #[route("/recipes/edit/:id")]
        EditRecipe { id: String },

        #[route("/postings")]
        Postings {},
        #[route("/add-posting")]
        AddPosting {},
        #[route("/postings/:id")]
        PostingDetail { id: String },
        #[route("/postings/edit/:id")]
        EditPosting { id: String },

        #[route("/note")]
        Notes {},
        #[route("/add-note")]
        AddNote {},
        #[route("/note/:id")]
        NoteDetail { id: String },
        #[route("/edit-note/:id")]
        EditNote { id: String },
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Minimum role needed to open this page.
    fn required_role(&self) -> Option<Role> {
        ui::required_role(&self.to_string())
    }

    /// Parse an in-app path, falling back to the home page.
    fn from_path(path: &str) -> Route {
        path.parse().unwrap_or(Route::Home {})
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG: &str = include_str!("../portal.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded config with the build-time base URL override applied.
fn load_config() -> PortalConfig {
    let config = PortalConfig::from_toml(CONFIG).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}", PortalConfig::filename());
        PortalConfig::default()
    });
    config.with_base_url_override(option_env!("PORTAL_API_BASE_URL"))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }

        ToastProvider {
            AuthProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_routes() {
        assert_eq!(Route::AddStudent {}.required_role(), Some(Role::Admin));
        assert_eq!(
            Route::EditStudent { id: "7".to_string() }.required_role(),
            Some(Role::Admin)
        );
        assert_eq!(Route::Students {}.required_role(), None);
        assert_eq!(Route::Home {}.required_role(), None);
        assert_eq!(Route::AddRecipe {}.required_role(), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Notes {}.to_string(), "/note");
        assert_eq!(Route::EditNote { id: "3".to_string() }.to_string(), "/edit-note/3");
        assert_eq!(Route::AddPosting {}.to_string(), "/add-posting");
        assert_eq!(
            Route::from_path("/mahasiswa/edit/5"),
            Route::EditStudent { id: "5".to_string() }
        );
    }

    #[test]
    fn test_login_redirect_round_trips() {
        let route = Route::Login {
            redirect: "/mahasiswa/edit/5".to_string(),
        };
        let parsed: Route = route.to_string().parse().unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_bare_login_has_empty_redirect() {
        let parsed: Route = "/login".parse().unwrap();
        assert_eq!(
            parsed,
            Route::Login {
                redirect: String::new()
            }
        );
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = PortalConfig::from_toml(CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }
}
