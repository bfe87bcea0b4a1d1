use dioxus::prelude::*;

use crate::request::RequestScope;

/// A request scope that is cancelled when the calling component unmounts.
///
/// Dismissing a screen while its simulated request is in flight therefore
/// drops the pending mutation instead of applying it to the session.
pub fn use_request_scope() -> RequestScope {
    let scope = use_hook(RequestScope::default);
    use_drop({
        let scope = scope.clone();
        move || {
            tracing::debug!("Screen unmounted, cancelling pending requests");
            scope.cancel();
        }
    });
    scope
}
