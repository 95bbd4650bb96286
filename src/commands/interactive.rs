//! Interactive caption session
//!
//! Shows the rendered page, then offers the actions that make sense in the
//! current state. Launch is only offered when an image is selected and
//! nothing is loading.

use crate::api::CaptionService;
use crate::clipboard::{SystemClipboard, TextClipboard};
use crate::config::CaptionConfig;
use crate::controller::CaptionController;
use crate::render::{self, LAUNCHING_LABEL};
use crate::selection::{ACCEPT, Selection};
use crate::style::CaptionStyle;
use crate::{Result, output};
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// One entry of the session menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Upload,
    ChangeStyle,
    Launch,
    CopyCaption,
    OpenPreview,
    Quit,
}

impl MenuAction {
    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload image",
            Self::ChangeStyle => "Change style",
            Self::Launch => "Launch",
            Self::CopyCaption => "Copy a caption",
            Self::OpenPreview => "Open preview",
            Self::Quit => "Quit",
        }
    }
}

/// Actions available for the controller's current state, in menu order
#[must_use]
pub fn menu_actions<S: CaptionService>(controller: &CaptionController<S>) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Upload, MenuAction::ChangeStyle];
    if controller.can_submit() {
        actions.push(MenuAction::Launch);
    }
    if controller.result().is_some_and(|r| !r.captions.is_empty()) {
        actions.push(MenuAction::CopyCaption);
    }
    if controller.preview().is_some_and(|p| p.path().is_some()) {
        actions.push(MenuAction::OpenPreview);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// Execute the interactive command
///
/// # Errors
///
/// Returns `CaptionError` if the client cannot be built or a prompt fails.
/// Failed uploads and submissions are shown and the session continues.
pub fn execute(
    config: &CaptionConfig,
    style: Option<CaptionStyle>,
    api_url_flag: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let client = super::http_client(config, api_url_flag)?;
    let mut controller = CaptionController::new(client, style.unwrap_or(config.default_style));
    let mut clipboard = SystemClipboard::new();
    let theme = ColorfulTheme::default();

    loop {
        println!("\n{}\n", render::render(&controller));

        let actions = menu_actions(&controller);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(action) = choice.map(|i| actions[i]) else {
            break;
        };

        match action {
            MenuAction::Upload => {
                let path: String = Input::with_theme(&theme)
                    .with_prompt(format!("Image path ({ACCEPT})"))
                    .interact_text()?;
                match Selection::from_path(path.trim()) {
                    Ok(selection) => controller.select_file(selection),
                    Err(e) => output::error(&e.to_string()),
                }
            }
            MenuAction::ChangeStyle => {
                let labels: Vec<&str> = CaptionStyle::ALL.iter().map(|s| s.label()).collect();
                let index = Select::with_theme(&theme)
                    .with_prompt("Caption style")
                    .items(&labels)
                    .default(controller.style().index())
                    .interact()?;
                controller.set_style(CaptionStyle::ALL[index]);
            }
            MenuAction::Launch => {
                output::info(LAUNCHING_LABEL, quiet);
                controller.submit();
            }
            MenuAction::CopyCaption => copy_menu(&controller, &mut clipboard, &theme, quiet)?,
            MenuAction::OpenPreview => {
                if let Some(Err(e)) = controller.preview().map(|p| p.open()) {
                    output::error(&e.to_string());
                }
            }
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn copy_menu<S: CaptionService>(
    controller: &CaptionController<S>,
    clipboard: &mut dyn TextClipboard,
    theme: &ColorfulTheme,
    quiet: bool,
) -> Result<()> {
    let Some(result) = controller.result() else {
        return Ok(());
    };

    let index = Select::with_theme(theme)
        .with_prompt("Copy which caption?")
        .items(&result.captions)
        .default(0)
        .interact_opt()?;

    if let Some(index) = index
        && controller.copy_caption(index, clipboard)
    {
        output::success("Copied!", quiet);
    }
    Ok(())
}
