//! Terminal wizard — line-oriented driver for the onboarding flow.
//!
//! Not a TUI: each step prints its options and reads simple commands
//! (`1`, `g 2`, `l USA`, `n`, `b`, `q`) from stdin. The flow manager
//! owns all state; this module only renders and translates input.

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::onboarding::controller::{Step, StepAction};
use crate::onboarding::form::{
    AgeRange, BudgetRange, CampaignGoal, Gender, ProductCategory, Role, SocialPlatform, Timeline,
};
use crate::onboarding::labels;
use crate::onboarding::manager::{NoticeLevel, OnboardingFlow};

/// Run the wizard to completion (or EOF / quit). Returns the redirect
/// target when the campaign was created.
pub async fn run(flow: OnboardingFlow) -> anyhow::Result<Option<String>> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    Wizard { flow, lines }.run().await
}

struct Wizard {
    flow: OnboardingFlow,
    lines: Lines<BufReader<Stdin>>,
}

impl Wizard {
    async fn run(mut self) -> anyhow::Result<Option<String>> {
        loop {
            if self.flow.take_viewport_reset() {
                self.render_header();
                self.render_step();
            }

            eprint!("> ");
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None); // EOF
            };
            let input = line.trim();

            match input {
                "q" => return Ok(None),
                "b" => {
                    if !self.flow.back() {
                        eprintln!("Already at the first step.");
                    }
                }
                "" | "n" => self.advance().await?,
                other => {
                    self.handle_step_input(other);
                    self.render_step();
                }
            }

            self.print_notices();

            if self.flow.is_complete() {
                let target = self.flow.redirect().map(str::to_string);
                if let Some(ref target) = target {
                    eprintln!("→ Opening {target}");
                }
                return Ok(target);
            }
        }
    }

    /// Enter or submit, depending on the step's affordance.
    async fn advance(&mut self) -> anyhow::Result<()> {
        match self.flow.current_step().action() {
            StepAction::Next => {
                if !self.flow.next() {
                    eprintln!("Please complete this step first.");
                }
            }
            StepAction::CreateProfile => {
                eprintln!("⏳ Creating profile...");
                self.flow.submit_profile().await?;
            }
            StepAction::CreateCampaign => {
                eprintln!("⏳ Creating campaign...");
                self.flow.submit_campaign().await?;
            }
        }
        Ok(())
    }

    fn render_header(&self) {
        let position = self.flow.position();
        let step = self.flow.current_step();
        eprintln!();
        eprintln!(
            "── {} · step {} of {} · {:.0}% ──",
            step.title(),
            position.overall_index() + 1,
            crate::onboarding::controller::TOTAL_STEPS,
            position.progress_percent(),
        );
    }

    fn render_step(&self) {
        let form = self.flow.form();
        match self.flow.current_step() {
            Step::RoleSelection => {
                eprintln!("How do you plan to use KOLab?");
                for (i, role) in Role::ALL.iter().enumerate() {
                    let mark = if form.role == Some(*role) { "●" } else { "○" };
                    let suffix = if role.is_enabled() { "" } else { " (coming soon)" };
                    eprintln!("  {} {} {}{}", i + 1, mark, role.code(), suffix);
                }
                eprintln!("Type a number to select, then Enter to continue.");
            }
            Step::ProfileDetails => {
                eprintln!("  1 Full name: {}", form.full_name);
                eprintln!("  2 Email:     {}", form.email);
                eprintln!("  3 Company:   {}", form.company);
                eprintln!("  4 Position:  {}", form.position);
                eprintln!("Type `1 Jane Doe` to set a field, Enter to continue.");
            }
            Step::ProfileComplete => {
                eprintln!("Your profile:");
                if let Some(role) = form.role {
                    eprintln!("  Account type: {}", role.code());
                }
                eprintln!("  Name:         {}", form.full_name);
                eprintln!("  Company:      {}", form.company);
                eprintln!("Press Enter to create your profile.");
            }
            Step::CampaignGoals => {
                render_toggle_list("Goals", &CampaignGoal::ALL, &form.campaign_goals, |g| {
                    labels::goal_label(*g)
                });
                render_choice_list("Budget ($ n)", &BudgetRange::ALL, form.budget_range, |b| {
                    labels::budget_label(*b)
                });
                render_choice_list("Timeline (t n)", &Timeline::ALL, form.timeline, |t| t.code());
                render_toggle_list(
                    "Platforms (p n)",
                    &SocialPlatform::ALL[..5],
                    &form.social_platforms,
                    |p| labels::platform_label(*p),
                );
                eprintln!("Commands: `g n` goal, `$ n` budget, `t n` timeline, `p n` platform.");
            }
            Step::TargetAudience => {
                render_toggle_list("Ages (a n)", &AgeRange::ALL, &form.target_age_range, |a| {
                    a.code()
                });
                render_toggle_list(
                    "Genders (g n)",
                    &Gender::ALL_OPTIONS,
                    &form.target_gender,
                    |g| labels::gender_label(*g),
                );
                eprintln!("  Locations: {}", form.target_locations.join(", "));
                eprintln!("  Interests: {}", form.target_interests.join(", "));
                render_toggle_list(
                    "Preferred platforms (p n)",
                    &SocialPlatform::ALL,
                    &form.preferred_platforms,
                    |p| labels::platform_label(*p),
                );
                eprintln!(
                    "Commands: `a n`, `g n`, `p n`, `l <place>` / `rl <place>`, `i <topic>` / `ri <topic>`."
                );
            }
            Step::ProductCategory => {
                render_choice_list("Category (c n)", &ProductCategory::ALL, form.product_category, |c| {
                    labels::category_label(*c)
                });
                eprintln!("  Description: {}", form.product_description);
                eprintln!("Commands: `c n` category, `d <text>` description (min 10 chars).");
            }
            Step::CampaignComplete => {
                eprintln!("Your campaign:");
                if let Some(goal) = form.campaign_goals.first() {
                    eprintln!("  Primary goal: {}", labels::goal_label(*goal));
                }
                if let Some(budget) = form.budget_range {
                    eprintln!("  Budget:       {}", labels::budget_label(budget));
                }
                if let Some(category) = form.product_category {
                    eprintln!("  Category:     {}", labels::category_label(category));
                }
                eprintln!("Optional: `t <title>` to name the campaign.");
                eprintln!("Press Enter to create your campaign.");
            }
        }
        if self.flow.current_step().action() == StepAction::Next && !self.flow.can_advance() {
            eprintln!("(complete this step to continue)");
        }
    }

    fn handle_step_input(&mut self, input: &str) {
        let (command, arg) = split_command(input);
        let step = self.flow.current_step();
        let form = self.flow.form_mut();
        match step {
            Step::RoleSelection => {
                if let Some(role) = pick(&Role::ALL, command) {
                    if role.is_enabled() {
                        form.select_role(role);
                    } else {
                        eprintln!("That role is not available yet.");
                    }
                }
            }
            Step::ProfileDetails => match command {
                "1" => form.full_name = arg.to_string(),
                "2" => form.email = arg.to_string(),
                "3" => form.company = arg.to_string(),
                "4" => form.position = arg.to_string(),
                _ => eprintln!("Unknown command."),
            },
            Step::CampaignGoals => match command {
                "g" => toggle_picked(&CampaignGoal::ALL, arg, |g| form.toggle_goal(g)),
                "$" => {
                    if let Some(budget) = pick(&BudgetRange::ALL, arg) {
                        form.budget_range = Some(budget);
                    }
                }
                "t" => {
                    if let Some(timeline) = pick(&Timeline::ALL, arg) {
                        form.timeline = Some(timeline);
                    }
                }
                "p" => toggle_picked(&SocialPlatform::ALL[..5], arg, |p| {
                    form.toggle_social_platform(p)
                }),
                _ => eprintln!("Unknown command."),
            },
            Step::TargetAudience => match command {
                "a" => toggle_picked(&AgeRange::ALL, arg, |a| form.toggle_age_range(a)),
                "g" => toggle_picked(&Gender::ALL_OPTIONS, arg, |g| form.toggle_gender(g)),
                "p" => toggle_picked(&SocialPlatform::ALL, arg, |p| {
                    form.toggle_preferred_platform(p)
                }),
                "l" => form.add_location(arg),
                "rl" => form.remove_location(arg),
                "i" => form.add_interest(arg),
                "ri" => form.remove_interest(arg),
                _ => eprintln!("Unknown command."),
            },
            Step::ProductCategory => match command {
                "c" => {
                    if let Some(category) = pick(&ProductCategory::ALL, arg) {
                        form.product_category = Some(category);
                    }
                }
                "d" => form.product_description = arg.to_string(),
                _ => eprintln!("Unknown command."),
            },
            Step::CampaignComplete => match command {
                "t" => {
                    form.campaign_title = if arg.is_empty() {
                        None
                    } else {
                        Some(arg.to_string())
                    }
                }
                _ => eprintln!("Unknown command."),
            },
            Step::ProfileComplete => eprintln!("Press Enter to create your profile."),
        }
    }

    fn print_notices(&mut self) {
        for notice in self.flow.drain_notices() {
            match notice.level {
                NoticeLevel::Success => eprintln!("✅ {}", notice.message),
                NoticeLevel::Error => eprintln!("❌ {}", notice.message),
            }
        }
    }
}

fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    }
}

/// Resolve a 1-based index argument against an option list.
fn pick<T: Copy>(options: &[T], arg: &str) -> Option<T> {
    match arg.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1]),
        _ => {
            eprintln!("Pick a number between 1 and {}.", options.len());
            None
        }
    }
}

fn toggle_picked<T: Copy>(options: &[T], arg: &str, mut apply: impl FnMut(T)) {
    if let Some(value) = pick(options, arg) {
        apply(value);
    }
}

fn render_toggle_list<T: Copy + PartialEq>(
    heading: &str,
    options: &[T],
    selected: &[T],
    label: impl Fn(&T) -> &str,
) {
    eprintln!("  {heading}:");
    for (i, option) in options.iter().enumerate() {
        let mark = if selected.contains(option) { "[x]" } else { "[ ]" };
        eprintln!("    {} {} {}", i + 1, mark, label(option));
    }
}

fn render_choice_list<T: Copy + PartialEq>(
    heading: &str,
    options: &[T],
    selected: Option<T>,
    label: impl Fn(&T) -> &str,
) {
    eprintln!("  {heading}:");
    for (i, option) in options.iter().enumerate() {
        let mark = if selected == Some(*option) { "●" } else { "○" };
        eprintln!("    {} {} {}", i + 1, mark, label(option));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_separates_first_token() {
        assert_eq!(split_command("l New York"), ("l", "New York"));
        assert_eq!(split_command("n"), ("n", ""));
        assert_eq!(split_command("d  padded text "), ("d", "padded text"));
    }

    #[test]
    fn pick_is_one_based_and_bounded() {
        let options = [10, 20, 30];
        assert_eq!(pick(&options, "1"), Some(10));
        assert_eq!(pick(&options, "3"), Some(30));
        assert_eq!(pick(&options, "0"), None);
        assert_eq!(pick(&options, "4"), None);
        assert_eq!(pick(&options, "x"), None);
    }
}
