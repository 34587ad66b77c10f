//! # Route guard policy
//!
//! Pure decisions about whether a page may render for the current
//! [`Session`]. The router layouts in the web package call these on every
//! navigation and turn the returned [`Access`] into a render or a redirect;
//! nothing here touches the router or storage, so it is tested directly.

use store::{Role, Session};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Show the requested page.
    Render,
    /// Not signed in: go to the login page, remembering where the user was headed.
    Login { from: String },
    /// Signed in without the required role: notify and go home.
    Denied,
    /// Already signed in on a login/register page: go home.
    Home,
}

/// Minimum role declared for a client path. Only the student add and edit
/// pages are admin-only.
pub fn required_role(path: &str) -> Option<Role> {
    let path = strip_query(path).trim_end_matches('/');
    if path == "/mahasiswa/add" || path.starts_with("/mahasiswa/edit/") {
        Some(Role::Admin)
    } else {
        None
    }
}

/// Guard for pages that need a signed-in user, optionally with `required` role.
pub fn check_private(session: &Session, required: Option<Role>, requested: &str) -> Access {
    if !session.is_authenticated() {
        return Access::Login {
            from: requested.to_string(),
        };
    }
    if let Some(role) = required {
        if session.user().map(|user| user.role) != Some(role) {
            return Access::Denied;
        }
    }
    Access::Render
}

/// Guard for login and register: signed-in users are sent home.
pub fn check_public(session: &Session) -> Access {
    if session.is_authenticated() {
        Access::Home
    } else {
        Access::Render
    }
}

/// Where to go after a successful login, given the location carried to the
/// login page. Only in-app paths are honoured; anything else goes home.
pub fn post_login_destination(from: &str) -> &str {
    let is_internal = from.starts_with('/') && !from.starts_with("//") && !from.contains('\\');
    let path = strip_query(from).trim_end_matches('/');
    if !is_internal || path == LOGIN_PATH || path == REGISTER_PATH {
        return HOME_PATH;
    }
    from
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Profile;

    fn signed_in(role: Role) -> Session {
        Session {
            token: Some("abc".to_string()),
            user: Some(Profile {
                id: 1,
                username: "u".to_string(),
                email: "e".to_string(),
                role,
            }),
        }
    }

    #[test]
    fn test_signed_out_goes_to_login_with_location() {
        let session = Session::default();
        for role in [None, Some(Role::Admin), Some(Role::User)] {
            assert_eq!(
                check_private(&session, role, "/recipes/7"),
                Access::Login {
                    from: "/recipes/7".to_string()
                }
            );
        }
    }

    #[test]
    fn test_user_denied_admin_page() {
        let session = signed_in(Role::User);
        assert_eq!(
            check_private(&session, Some(Role::Admin), "/mahasiswa/add"),
            Access::Denied
        );
    }

    #[test]
    fn test_admin_renders_admin_page() {
        let session = signed_in(Role::Admin);
        assert_eq!(
            check_private(&session, Some(Role::Admin), "/mahasiswa/add"),
            Access::Render
        );
    }

    #[test]
    fn test_no_role_requirement() {
        assert_eq!(
            check_private(&signed_in(Role::User), None, "/note"),
            Access::Render
        );
    }

    #[test]
    fn test_token_without_user_is_signed_out() {
        let session = Session {
            token: Some("abc".to_string()),
            user: None,
        };
        assert!(matches!(
            check_private(&session, None, "/"),
            Access::Login { .. }
        ));
    }

    #[test]
    fn test_public_guard() {
        assert_eq!(check_public(&Session::default()), Access::Render);
        assert_eq!(check_public(&signed_in(Role::User)), Access::Home);
    }

    #[test]
    fn test_required_role() {
        assert_eq!(required_role("/mahasiswa/add"), Some(Role::Admin));
        assert_eq!(required_role("/mahasiswa/add/"), Some(Role::Admin));
        assert_eq!(required_role("/mahasiswa/edit/12"), Some(Role::Admin));
        assert_eq!(required_role("/mahasiswa/edit/12?tab=1"), Some(Role::Admin));
        assert_eq!(required_role("/mahasiswa"), None);
        assert_eq!(required_role("/"), None);
        assert_eq!(required_role("/postings/edit/3"), None);
    }

    #[test]
    fn test_post_login_destination() {
        assert_eq!(post_login_destination("/mahasiswa/add"), "/mahasiswa/add");
        assert_eq!(post_login_destination("/note/3?x=1"), "/note/3?x=1");
        assert_eq!(post_login_destination(""), "/");
        assert_eq!(post_login_destination("/login"), "/");
        assert_eq!(post_login_destination("/register/"), "/");
        assert_eq!(post_login_destination("//evil.example.com"), "/");
        assert_eq!(post_login_destination("https://evil.example.com"), "/");
        assert_eq!(post_login_destination("/\\evil.example.com"), "/");
    }
}
