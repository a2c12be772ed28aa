use leptos::prelude::*;

/// Page title with the "Add User" button.
///
/// The button has no handler, pressing it does nothing.
#[component]
pub fn TitleBar(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="title-bar">
            <h1>{title}</h1>
            <button class="add-user" type="button">
                "Add User"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_title_and_plain_button_outside_any_form() {
        let html = Owner::new().with(|| view! { <TitleBar title="Users" /> }.to_html());

        assert!(html.contains("Users</h1>"));
        assert!(html.contains("Add User"));
        assert!(html.contains(r#"type="button""#));
        assert!(!html.contains("<form"));
    }
}
