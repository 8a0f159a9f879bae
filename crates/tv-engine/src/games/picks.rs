//! Games that pick a single person, task, or prompt.

use rand::rngs::StdRng;

use tv_roster::RosterAccess;

use super::{NO_PEOPLE, NO_PROMPTS, NO_TASKS};
use crate::birthday::todays_birthdays;
use crate::catalog::Catalogs;
use crate::error::EngineResult;
use crate::game::Game;
use crate::outcome::{Outcome, OutcomeDetail};
use crate::random::pick_one;

/// Pick one person.
pub fn random_person<S: RosterAccess + ?Sized>(store: &S, rng: &mut StdRng) -> EngineResult<Outcome> {
    let label = Game::RandomPerson.label();
    if store.people().is_empty() {
        return Ok(Outcome::failure(label, NO_PEOPLE));
    }
    let person = pick_one(store.people(), rng)?.clone();
    Ok(Outcome::success(
        label,
        format!("🎯 {person}"),
        OutcomeDetail::Person { person },
    ))
}

/// Pick a person and an active task. Birthday people may hand the task on.
pub fn random_person_and_task<S: RosterAccess + ?Sized>(
    store: &S,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::RandomPersonAndTask.label();
    if store.people().is_empty() {
        return Ok(Outcome::failure(label, NO_PEOPLE));
    }
    let tasks = store.active_tasks();
    if tasks.is_empty() {
        return Ok(Outcome::failure(label, NO_TASKS));
    }

    let person = pick_one(store.people(), rng)?.clone();
    let task = pick_one(&tasks, rng)?.to_string();
    let birthday_bonus = todays_birthdays(store, store.now().date()).contains(&person);

    let mut message = format!("🎯 {person}\n\n📝 Task: {task}");
    if birthday_bonus {
        message.push_str(&format!(
            "\n\n🎂 BIRTHDAY POWER-UP! {person} can pass this task to someone else!"
        ));
    }

    Ok(Outcome::success(
        label,
        message,
        OutcomeDetail::PersonTask {
            person,
            task,
            birthday_bonus,
        },
    ))
}

/// "Who's most likely to ..." with a random person as the verdict.
pub fn most_likely_to<S: RosterAccess + ?Sized>(
    store: &S,
    catalogs: &Catalogs,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::MostLikelyTo.label();
    if store.people().is_empty() {
        return Ok(Outcome::failure(label, NO_PEOPLE));
    }
    if catalogs.most_likely.is_empty() {
        return Ok(Outcome::failure(label, NO_PROMPTS));
    }
    let person = pick_one(store.people(), rng)?.clone();
    let prompt = pick_one(&catalogs.most_likely, rng)?.clone();
    Ok(Outcome::success(
        label,
        format!("🤔 Who's most likely to {prompt}?\n\n💡 The tribe has spoken: {person}!"),
        OutcomeDetail::MostLikely { person, prompt },
    ))
}

/// List today's birthdays. Finding none still counts as a result.
pub fn check_birthdays<S: RosterAccess + ?Sized>(store: &S) -> Outcome {
    let label = Game::CheckBirthdays.label();
    let people = todays_birthdays(store, store.now().date());
    let message = if people.is_empty() {
        "🎂 No birthdays today!\n\n(Add birthdates to see them here)".to_string()
    } else {
        format!(
            "🎉🎂 HAPPY BIRTHDAY! 🎂🎉\n\n{}\n\nLet's celebrate!",
            people.join(", ")
        )
    };
    Outcome::success(label, message, OutcomeDetail::Birthdays { people })
}

/// Hand a random active task to `person`.
///
/// The name is taken as given; it does not have to be on the roster.
pub fn assign_task_to_person<S: RosterAccess + ?Sized>(
    person: &str,
    store: &S,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::AssignTask.label();
    let tasks = store.active_tasks();
    if tasks.is_empty() {
        return Ok(Outcome::failure(label, NO_TASKS));
    }
    let task = pick_one(&tasks, rng)?.to_string();
    Ok(Outcome::success(
        label,
        format!("📋 Task for {person}:\n\n{task}"),
        OutcomeDetail::Task {
            person: person.to_string(),
            task,
        },
    ))
}

/// Pick a person, then hand them a random active task.
pub fn assign_task_to_random_person<S: RosterAccess + ?Sized>(
    store: &S,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    if store.people().is_empty() {
        return Ok(Outcome::failure(Game::AssignTask.label(), NO_PEOPLE));
    }
    let person = pick_one(store.people(), rng)?.clone();
    assign_task_to_person(&person, store, rng)
}

/// Put someone in the spotlight with a phrase and a recognition.
pub fn spotlight<S: RosterAccess + ?Sized>(
    store: &S,
    catalogs: &Catalogs,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::Spotlight.label();
    if store.people().is_empty() {
        return Ok(Outcome::failure(label, NO_PEOPLE));
    }
    if catalogs.appreciation.is_empty() || catalogs.recognition.is_empty() {
        return Ok(Outcome::failure(label, NO_PROMPTS));
    }
    let person = pick_one(store.people(), rng)?.clone();
    let phrase = pick_one(&catalogs.appreciation, rng)?.clone();
    let recognition = pick_one(&catalogs.recognition, rng)?.clone();
    Ok(Outcome::success(
        label,
        format!("🌟 Spotlight on {person}!\n\n{person} {phrase}.\n\n{recognition}"),
        OutcomeDetail::Spotlight {
            person,
            phrase,
            recognition,
        },
    ))
}

/// Pick who opens the standup.
pub fn standup_roulette<S: RosterAccess + ?Sized>(
    store: &S,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::StandupRoulette.label();
    if store.people().is_empty() {
        return Ok(Outcome::failure(label, NO_PEOPLE));
    }
    let person = pick_one(store.people(), rng)?.clone();
    Ok(Outcome::success(
        label,
        format!("🎙️ {person} kicks off the standup!\n\nThen pass it to whoever they pick next."),
        OutcomeDetail::Standup { person },
    ))
}

/// Pick a debate prompt.
pub fn opinion_split(catalogs: &Catalogs, rng: &mut StdRng) -> EngineResult<Outcome> {
    let label = Game::OpinionSplit.label();
    if catalogs.debates.is_empty() {
        return Ok(Outcome::failure(label, NO_PROMPTS));
    }
    let prompt = pick_one(&catalogs.debates, rng)?.clone();
    Ok(Outcome::success(
        label,
        format!("⚖️ Opinion Split:\n\n{prompt}\n\nPick a side of the room!"),
        OutcomeDetail::Opinion { prompt },
    ))
}

/// Pick an active task and a time limit to finish it in.
pub fn time_box_challenge<S: RosterAccess + ?Sized>(
    store: &S,
    catalogs: &Catalogs,
    rng: &mut StdRng,
) -> EngineResult<Outcome> {
    let label = Game::TimeBoxChallenge.label();
    let tasks = store.active_tasks();
    if tasks.is_empty() {
        return Ok(Outcome::failure(label, NO_TASKS));
    }
    if catalogs.timebox_minutes.is_empty() || catalogs.timebox_icons.is_empty() {
        return Ok(Outcome::failure(label, NO_PROMPTS));
    }
    let task = pick_one(&tasks, rng)?.to_string();
    let minutes = *pick_one(&catalogs.timebox_minutes, rng)?;
    let icon = pick_one(&catalogs.timebox_icons, rng)?.clone();
    let unit = if minutes == 1 { "minute" } else { "minutes" };
    Ok(Outcome::success(
        label,
        format!("{icon} Time-Box Challenge: {minutes} {unit}!\n\n📝 {task}"),
        OutcomeDetail::TimeBox {
            task,
            minutes,
            icon,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::SeedableRng;
    use tv_roster::{Clock, RosterStore};

    fn at(m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn store(names: &[&str], tasks: &[&str]) -> RosterStore {
        let mut s = RosterStore::new().with_clock(Clock::Fixed(at(3, 15)));
        s.add_people(names.iter().copied());
        s.set_task_catalog(tasks.iter().map(|t| t.to_string()).collect());
        s
    }

    #[test]
    fn random_person_needs_someone() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = random_person(&store(&[], &[]), &mut rng).unwrap();
        assert!(!out.ok);
        assert_eq!(out.message, NO_PEOPLE);
    }

    #[test]
    fn random_person_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = random_person(&store(&["Alice"], &[]), &mut rng).unwrap();
        assert!(out.ok);
        assert_eq!(out.message, "🎯 Alice");
        assert_eq!(
            out.detail,
            OutcomeDetail::Person {
                person: "Alice".into()
            }
        );
    }

    #[test]
    fn person_and_task_needs_tasks() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = random_person_and_task(&store(&["Alice"], &[]), &mut rng).unwrap();
        assert!(!out.ok);
        assert_eq!(out.message, NO_TASKS);
    }

    #[test]
    fn person_and_task_uses_selection() {
        let mut s = store(&["Alice", "Bob"], &["T1", "T2", "T3"]);
        s.select_tasks(&[1]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let out = random_person_and_task(&s, &mut rng).unwrap();
            match out.detail {
                OutcomeDetail::PersonTask { task, .. } => assert_eq!(task, "T2"),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn birthday_bonus_applies() {
        let mut s = store(&["Alice"], &["T1"]);
        s.set_birthdate("Alice", "03-15").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let out = random_person_and_task(&s, &mut rng).unwrap();
        assert!(out.message.contains("BIRTHDAY POWER-UP"));
        assert!(matches!(
            out.detail,
            OutcomeDetail::PersonTask {
                birthday_bonus: true,
                ..
            }
        ));
    }

    #[test]
    fn no_bonus_on_other_days() {
        let mut s = store(&["Alice"], &["T1"]);
        s.set_birthdate("Alice", "16-03").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let out = random_person_and_task(&s, &mut rng).unwrap();
        assert!(!out.message.contains("BIRTHDAY"));
    }

    #[test]
    fn most_likely_uses_catalog() {
        let catalogs = Catalogs {
            most_likely: vec!["sing karaoke".into()],
            ..Catalogs::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        let out = most_likely_to(&store(&["Bob"], &[]), &catalogs, &mut rng).unwrap();
        assert_eq!(
            out.message,
            "🤔 Who's most likely to sing karaoke?\n\n💡 The tribe has spoken: Bob!"
        );
    }

    #[test]
    fn check_birthdays_empty_is_success() {
        let out = check_birthdays(&store(&["Alice"], &[]));
        assert!(out.ok);
        assert!(out.message.contains("No birthdays today"));
        assert_eq!(out.detail, OutcomeDetail::Birthdays { people: vec![] });
    }

    #[test]
    fn check_birthdays_lists_matches() {
        let mut s = store(&["Alice", "Bob", "Carol"], &[]);
        s.set_birthdate("Alice", "1990-03-15").unwrap();
        s.set_birthdate("Carol", "15-03").unwrap();
        let out = check_birthdays(&s);
        assert!(out.message.contains("Alice, Carol"));
    }

    #[test]
    fn assign_task_to_named_person() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = assign_task_to_person("Zed", &store(&[], &["Sing"]), &mut rng).unwrap();
        assert!(out.ok);
        assert_eq!(out.message, "📋 Task for Zed:\n\nSing");
    }

    #[test]
    fn assign_task_to_random_person_needs_people_and_tasks() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!assign_task_to_random_person(&store(&[], &["Sing"]), &mut rng).unwrap().ok);
        assert!(!assign_task_to_random_person(&store(&["Al"], &[]), &mut rng).unwrap().ok);
        let out = assign_task_to_random_person(&store(&["Al"], &["Sing"]), &mut rng).unwrap();
        assert_eq!(
            out.detail,
            OutcomeDetail::Task {
                person: "Al".into(),
                task: "Sing".into()
            }
        );
    }

    #[test]
    fn spotlight_composes_message() {
        let catalogs = Catalogs {
            appreciation: vec!["always shows up".into()],
            recognition: vec!["🏆 MVP".into()],
            ..Catalogs::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let out = spotlight(&store(&["Dana"], &[]), &catalogs, &mut rng).unwrap();
        assert_eq!(
            out.message,
            "🌟 Spotlight on Dana!\n\nDana always shows up.\n\n🏆 MVP"
        );
    }

    #[test]
    fn standup_needs_someone() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!standup_roulette(&store(&[], &[]), &mut rng).unwrap().ok);
        let out = standup_roulette(&store(&["Eve"], &[]), &mut rng).unwrap();
        assert!(out.message.starts_with("🎙️ Eve"));
    }

    #[test]
    fn opinion_split_needs_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = opinion_split(&Catalogs::default(), &mut rng).unwrap();
        assert!(out.ok);
        match out.detail {
            OutcomeDetail::Opinion { prompt } => {
                assert!(crate::catalog::DEBATE_PROMPTS.contains(&prompt.as_str()))
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn time_box_picks_from_catalogs() {
        let catalogs = Catalogs {
            timebox_minutes: vec![1],
            timebox_icons: vec!["⏳".into()],
            ..Catalogs::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let out = time_box_challenge(&store(&[], &["Juggle"]), &catalogs, &mut rng).unwrap();
        assert_eq!(out.message, "⏳ Time-Box Challenge: 1 minute!\n\n📝 Juggle");
        assert!(!time_box_challenge(&store(&[], &[]), &catalogs, &mut rng).unwrap().ok);
    }

    #[test]
    fn empty_catalog_lists_fail_gracefully() {
        let mut rng = StdRng::seed_from_u64(4);
        let s = store(&["Al", "Bo"], &["Sing"]);
        let mut catalogs = Catalogs::default();
        catalogs.most_likely.clear();
        catalogs.recognition.clear();
        catalogs.debates.clear();
        catalogs.timebox_icons.clear();

        for out in [
            most_likely_to(&s, &catalogs, &mut rng).unwrap(),
            spotlight(&s, &catalogs, &mut rng).unwrap(),
            opinion_split(&catalogs, &mut rng).unwrap(),
            time_box_challenge(&s, &catalogs, &mut rng).unwrap(),
        ] {
            assert!(!out.ok, "{}", out.game_label);
            assert_eq!(out.message, NO_PROMPTS);
        }
    }
}
