//! One-shot caption generation

use crate::api::CaptionService;
use crate::cli::GenerateArgs;
use crate::clipboard::{SystemClipboard, TextClipboard};
use crate::config::CaptionConfig;
use crate::controller::CaptionController;
use crate::render::{self, LAUNCHING_LABEL};
use crate::selection::Selection;
use crate::style::CaptionStyle;
use crate::{CaptionError, Result, output};
use std::path::Path;

/// Select `image`, submit it once with `style`, and return the settled controller
///
/// # Errors
///
/// Returns `CaptionError::SelectionError` if the image cannot be picked and
/// `CaptionError::GenerationFailed` if the submission settles with an error.
pub fn generate_with<S: CaptionService>(
    service: S,
    style: CaptionStyle,
    image: &Path,
) -> Result<CaptionController<S>> {
    let mut controller = CaptionController::new(service, style);
    controller.select_file(Selection::from_path(image)?);

    controller.submit();

    if let Some(message) = controller.error() {
        return Err(CaptionError::GenerationFailed(message.to_string()));
    }
    Ok(controller)
}

/// Format the outcome of a settled controller for stdout
///
/// # Errors
///
/// Returns `CaptionError::JsonError` if the result cannot be serialized.
pub fn format_result<S: CaptionService>(
    controller: &CaptionController<S>,
    json: bool,
    quiet: bool,
) -> Result<String> {
    let Some(result) = controller.result() else {
        return Ok(String::new());
    };

    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else if quiet {
        Ok(render::plain(result))
    } else {
        Ok(render::render(controller))
    }
}

/// Execute the generate command
///
/// # Errors
///
/// Returns `CaptionError` if the image cannot be selected, the submission
/// fails, or the requested caption cannot be copied.
pub fn execute(config: &CaptionConfig, args: &GenerateArgs, api_url_flag: Option<&str>, quiet: bool) -> Result<()> {
    let client = super::http_client(config, api_url_flag)?;
    let style = args.style.unwrap_or(config.default_style);

    if args.preview {
        let selection = Selection::from_path(&args.image)?;
        if let Err(e) = crate::selection::Preview::of(&selection).open() {
            tracing::warn!(error = %e, "could not open preview");
        }
    }

    output::info(&format!("{LAUNCHING_LABEL} ({})", style.label()), quiet || args.json);
    let controller = generate_with(client, style, &args.image)?;

    println!("{}", format_result(&controller, args.json, quiet)?);

    if let Some(n) = args.copy {
        let quiet = quiet || args.json;
        let mut clipboard = SystemClipboard::holding();
        if cfg!(target_os = "linux") {
            output::info("Holding the caption on the clipboard until it is pasted", quiet);
        }
        copy_numbered(&controller, n, &mut clipboard)?;
        output::success(&format!("Copied caption #{n} to clipboard"), quiet);
    }

    Ok(())
}

/// Copy caption number `n` (1-based) of a settled controller
///
/// # Errors
///
/// Returns `CaptionError::InvalidInput` if there is no such caption and
/// `CaptionError::ClipboardError` if the clipboard refuses the text.
pub fn copy_numbered<S: CaptionService>(
    controller: &CaptionController<S>,
    n: u16,
    clipboard: &mut dyn TextClipboard,
) -> Result<()> {
    let caption = controller
        .result()
        .and_then(|r| r.caption(usize::from(n).saturating_sub(1)))
        .filter(|_| n > 0)
        .ok_or_else(|| CaptionError::InvalidInput(format!("There is no caption #{n} to copy")))?;

    clipboard.set_text(caption)?;
    Ok(())
}
