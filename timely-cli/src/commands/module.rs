use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use owo_colors::OwoColorize;
use timely_core::EventId;
use timely_core::authoring::{DATE_FORMAT, MultipleChoiceWizard, TIME_FORMAT, parse_date, parse_time};
use timely_core::config::TimelyConfig;
use timely_core::remote::EventBackend;

use super::connect;
use crate::utils::tui::with_spinner;

pub async fn run(config: &TimelyConfig, event_id: &str) -> Result<()> {
    let event_id = EventId::parse(event_id)?;
    let backend = connect(config)?;

    let guests = with_spinner(
        format!("Loading guests for {event_id}"),
        backend.event_guests(&event_id),
    )
    .await
    .context("Failed to load guests")?;

    if guests.is_empty() {
        anyhow::bail!("Event '{}' has no guests to send a module to.", event_id);
    }

    let mut wizard = MultipleChoiceWizard::starting_now(guests);

    println!("{}\n", "Create Multiple Choice Module".bold());
    compose(&mut wizard)?;

    if !wizard.advance() {
        wizard.cancel();
        anyhow::bail!("Question and options must all be filled in.");
    }

    println!("\n{}\n", "Select Guests for Module".bold());
    choose_audience(&mut wizard)?;

    let post = Confirm::new()
        .with_prompt(format!(
            "  Save & Post to {} guest(s)?",
            wizard.selected_guest_ids().len()
        ))
        .default(true)
        .interact()?;

    if !post {
        wizard.cancel();
        println!("{}", "  Discarded.".dimmed());
        return Ok(());
    }

    let submission = wizard
        .submit()
        .map_err(|_| anyhow::anyhow!("Module is incomplete"))?;

    let module_id = with_spinner("Posting module", backend.create_module(&event_id, &submission))
        .await
        .context("Failed to post module")?;
    tracing::debug!(event = %event_id, module = %module_id, "module posted");

    println!(
        "{}",
        format!(
            "  Posted: {} ({} at {})",
            submission.question,
            submission.date_string(),
            submission.time_string()
        )
        .green()
    );
    println!("  {}", format!("id {module_id}").dimmed());

    Ok(())
}

/// Step 1: question, options, date and time.
fn compose(wizard: &mut MultipleChoiceWizard) -> Result<()> {
    let question: String = Input::new().with_prompt("  Question").interact_text()?;
    wizard.set_question(question.trim());

    let first: String = Input::new().with_prompt("  Option 1").interact_text()?;
    wizard.set_option(0, first.trim());

    loop {
        let number = wizard.options().len() + 1;
        let option: String = Input::new()
            .with_prompt(format!("  Option {number} (enter to finish)"))
            .allow_empty(true)
            .interact_text()?;
        let option = option.trim();
        if option.is_empty() {
            break;
        }
        let index = wizard.add_option();
        wizard.set_option(index, option);
    }

    let date: String = Input::new()
        .with_prompt("  Date (YYYY-MM-DD)")
        .default(wizard.date().format(DATE_FORMAT).to_string())
        .validate_with(|input: &String| parse_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    wizard.set_date_str(&date)?;

    let time: String = Input::new()
        .with_prompt("  Time (HH:MM)")
        .default(wizard.time().format(TIME_FORMAT).to_string())
        .validate_with(|input: &String| parse_time(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    wizard.set_time_str(&time)?;

    Ok(())
}

/// Step 2: pick the audience until at least one guest is selected.
fn choose_audience(wizard: &mut MultipleChoiceWizard) -> Result<()> {
    loop {
        let mode = Select::new()
            .with_prompt("  Send to")
            .items(&["All guests", "Choose guests"])
            .default(0)
            .interact()?;

        if mode == 0 {
            wizard.select_all();
        } else {
            wizard.clear_all();

            let labels: Vec<String> = wizard
                .guests()
                .iter()
                .map(|g| format!("{} {}", g.display_name(), g.email.dimmed()))
                .collect();
            let picked = MultiSelect::new()
                .with_prompt("  Guests (space to toggle)")
                .items(&labels)
                .interact()?;

            let ids: Vec<String> = picked
                .into_iter()
                .filter_map(|i| wizard.guests().get(i).map(|g| g.id.clone()))
                .collect();
            for id in ids {
                wizard.toggle_guest(&id);
            }
        }

        if wizard.can_submit() {
            return Ok(());
        }
        eprintln!("  {}", "Select at least one guest.".red());
    }
}
