//! Server-side HTML for the browser pages.

use std::fmt::Write;

use storage::models::{Athlete, Lift, Workout};

const NAV_BEFORE_LEADERBOARDS: &[(&str, &str)] =
    &[("/", "Home"), ("/athletes/new", "Add athlete")];
const NAV_AFTER_LEADERBOARDS: &[(&str, &str)] =
    &[("/workouts", "Workouts"), ("/chat", "Chat"), ("/about", "About")];

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn layout(title: &str, body: &str) -> String {
    let mut nav = String::new();
    for (href, label) in NAV_BEFORE_LEADERBOARDS {
        let _ = write!(nav, r#"<a href="{}">{}</a> "#, href, label);
    }
    for lift in Lift::ALL {
        let _ = write!(nav, r#"<a href="/leaderboards/{}">{}</a> "#, lift, plural(lift));
    }
    for (href, label) in NAV_AFTER_LEADERBOARDS {
        let _ = write!(nav, r#"<a href="{}">{}</a> "#, href, label);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Liftlog</title>
</head>
<body>
<nav>{nav}</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        nav = nav,
        body = body,
    )
}

fn athlete_row(athlete: &Athlete) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&athlete.full_name()),
        escape(athlete.weight_class.gender.as_str()),
        escape(&athlete.weight_class.label()),
        athlete.best_squat,
        athlete.best_bench,
        athlete.best_deadlift,
        athlete.total,
    )
}

pub fn home(athletes: &[Athlete]) -> String {
    if athletes.is_empty() {
        return layout(
            "Powerlifters",
            r#"<p>No powerlifters yet. <a href="/athletes/new">Add one</a>.</p>"#,
        );
    }

    let rows: String = athletes.iter().map(athlete_row).collect();
    let body = format!(
        "<table>\n<thead><tr><th>Name</th><th>Gender</th><th>Class</th><th>Squat</th>\
         <th>Bench</th><th>Deadlift</th><th>Total</th></tr></thead>\n\
         <tbody>{}</tbody>\n</table>",
        rows
    );

    layout("Powerlifters", &body)
}

/// The create form, preceded by `errors` from a rejected submission.
pub fn create_form(errors: &[String]) -> String {
    let mut body = String::new();
    if !errors.is_empty() {
        body.push_str(r#"<ul class="errors">"#);
        for error in errors {
            let _ = write!(body, "<li>{}</li>", escape(error));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(
        r#"<form method="post" action="/athletes/new">
<label>First name <input name="first_name" required></label>
<label>Last name <input name="last_name" required></label>
<label>Body weight (kg) <input name="weight" type="number" step="0.1" min="0" required></label>
<label>Gender <select name="gender"><option>Male</option><option>Female</option></select></label>
<label>Squat <input name="squat" type="number" min="0" value="0" required></label>
<label>Bench <input name="bench" type="number" min="0" value="0" required></label>
<label>Deadlift <input name="deadlift" type="number" min="0" value="0" required></label>
<button type="submit">Add powerlifter</button>
</form>"#,
    );

    layout("Add a powerlifter", &body)
}

pub fn leaderboard(lift: Lift, athletes: &[Athlete]) -> String {
    let title = format!("Heaviest {}", plural(lift));

    if athletes.is_empty() {
        return layout(&title, "<p>No powerlifters yet.</p>");
    }

    let mut items = String::new();
    for athlete in athletes {
        let _ = write!(
            items,
            "<li>{} ({}): {}</li>",
            escape(&athlete.full_name()),
            escape(&athlete.weight_class.label()),
            lift.value_of(athlete)
        );
    }

    layout(&title, &format!("<ol>{}</ol>", items))
}

fn plural(lift: Lift) -> &'static str {
    match lift {
        Lift::Squat => "Squats",
        Lift::Bench => "Benches",
        Lift::Deadlift => "Deadlifts",
        Lift::Total => "Totals",
    }
}

fn workout_row(workout: &Workout) -> String {
    let cell = |weight: Option<i32>| {
        weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&workout.date),
        cell(workout.squat_weight),
        cell(workout.bench_weight),
        cell(workout.deadlift_weight),
        workout.top_set_rpe,
    )
}

pub fn workouts(athletes: &[Athlete]) -> String {
    if athletes.is_empty() {
        return layout("Workouts", "<p>No workouts logged yet.</p>");
    }

    let mut body = String::new();
    for athlete in athletes {
        let rows: String = athlete.workouts.iter().map(workout_row).collect();
        let _ = write!(
            body,
            "<section>\n<h2>{}</h2>\n<table>\n<thead><tr><th>Date</th><th>Squat</th>\
             <th>Bench</th><th>Deadlift</th><th>Top set RPE</th></tr></thead>\n\
             <tbody>{}</tbody>\n</table>\n</section>\n",
            escape(&athlete.full_name()),
            rows
        );
    }

    layout("Workouts", &body)
}

pub fn about() -> String {
    layout(
        "About",
        "<p>Liftlog keeps track of powerlifters: their weight class, best squat, bench and \
         deadlift, their total, and the workouts they log. The same data is available as JSON \
         under <code>/api</code>; see <a href=\"/swagger-ui/\">the API docs</a>.</p>",
    )
}

pub fn chat() -> String {
    let body = r#"<ul id="messages"></ul>
<form id="chat-form">
<input id="chat-input" autocomplete="off" required>
<button type="submit">Send</button>
</form>
<script>
const scheme = location.protocol === "https:" ? "wss" : "ws";
const socket = new WebSocket(scheme + "://" + location.host + "/chat/ws");
const messages = document.getElementById("messages");
const input = document.getElementById("chat-input");
socket.addEventListener("message", (event) => {
  const item = document.createElement("li");
  item.textContent = event.data;
  messages.appendChild(item);
});
document.getElementById("chat-form").addEventListener("submit", (event) => {
  event.preventDefault();
  socket.send(input.value);
  input.value = "";
});
</script>"#;

    layout("Chat", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::models::{Gender, WeightClass};

    fn athlete(first_name: &str) -> Athlete {
        Athlete::new(
            first_name,
            "Doe",
            WeightClass {
                threshold_kg: 63,
                plus: false,
                gender: Gender::Female,
            },
        )
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_home_escapes_names() {
        let page = home(&[athlete("<script>")]);
        assert!(page.contains("&lt;script&gt; Doe"));
        assert!(!page.contains("<script> Doe"));
    }

    #[test]
    fn test_home_empty_state() {
        assert!(home(&[]).contains("No powerlifters yet"));
    }

    #[test]
    fn test_nav_links_every_leaderboard() {
        let page = about();
        for href in [
            "/leaderboards/squat",
            "/leaderboards/bench",
            "/leaderboards/deadlift",
            "/leaderboards/total",
        ] {
            assert!(page.contains(href), "missing {}", href);
        }
    }

    #[test]
    fn test_create_form_lists_escaped_errors() {
        let page = create_form(&["gender: must be <Male> or <Female>".to_string()]);
        assert!(page.contains(
            r#"<ul class="errors"><li>gender: must be &lt;Male&gt; or &lt;Female&gt;</li></ul>"#
        ));
        assert!(page.contains(r#"<form method="post""#));

        assert!(!create_form(&[]).contains("errors"));
    }

    #[test]
    fn test_leaderboard_lists_values() {
        let mut jane = athlete("Jane");
        jane.best_bench = 95;
        let page = leaderboard(Lift::Bench, &[jane]);

        assert!(page.contains("Heaviest Benches"));
        assert!(page.contains("Jane Doe (63kg): 95"));
    }

    #[test]
    fn test_workout_row_marks_missing_lifts() {
        let row = workout_row(&Workout {
            date: "October 18, 2026".to_string(),
            squat_weight: Some(120),
            bench_weight: None,
            deadlift_weight: None,
            top_set_rpe: 8.5,
        });

        assert_eq!(
            row,
            "<tr><td>October 18, 2026</td><td>120</td><td>-</td><td>-</td><td>8.5</td></tr>"
        );
    }
}
