use daily_math_core::types::{PageIndex, SiteLayout, Slug};

/// Pages listed under "Recent days" on the homepage
pub const RECENT_LIMIT: usize = 30;

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn footer(year: i32) -> String {
    format!("<footer>© {} • Auto-generated daily</footer>", year)
}

/// Wrap a rendered worksheet in the daily page layout.
///
/// The page lives in `daily/`, so every site link is one level up.
pub fn render_daily_page(title: &str, slug: &Slug, body_html: &str, year: i32) -> String {
    let title = html_escape(title);
    let slug = html_escape(slug.as_str());

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>{title} - {slug}</title><link rel="stylesheet" href="../styles.css"/></head>
<body>
<header><a href="../index.html">{title}</a></header>
<main class="container" id="worksheet" data-date="{slug}">
<div class="toolbar">
  <label for="voice-lang">Voice</label>
  <select id="voice-lang">
    <option value="en-CA">English</option>
    <option value="fr-CA">Français</option>
  </select>
  <button type="button" id="read-aloud">Read aloud</button>
  <button type="button" id="stop-reading">Stop</button>
  <button type="button" id="toggle-hints" aria-pressed="false">Show hints</button>
  <button type="button" id="toggle-answers" aria-pressed="false">Show answers</button>
</div>
<article class="content">
{body_html}
</article>
<form id="practice-form" class="practice">
  <h2>Practice tracker</h2>
  <label for="solved">Problems I solved today</label>
  <input type="number" id="solved" name="solved" min="0" max="5" value="0"/>
  <button type="submit">Mark today as practised</button>
  <p class="streak">Streak: <span id="streak-count">0</span> day(s)</p>
  <p id="practice-status" role="status"></p>
</form>
<p class="back"><a href="../index.html">&larr; Back to Home</a></p>
</main>
{footer}
<script>
{script}
</script>
</body></html>
"#,
        title = title,
        slug = slug,
        body_html = body_html,
        footer = footer(year),
        script = practice_script(),
    )
}

/// Render the homepage from the current page index
pub fn render_homepage(title: &str, index: &PageIndex, year: i32) -> String {
    let title = html_escape(title);

    let latest = match index.latest() {
        Some(slug) => format!(
            r#"<a href="{}">Open today</a>"#,
            html_escape(&SiteLayout::page_href(slug))
        ),
        None => "First post arrives after the first daily run.".to_string(),
    };

    let recent = index.recent(RECENT_LIMIT);
    let list = if recent.is_empty() {
        "<li>No daily pages yet.</li>".to_string()
    } else {
        recent
            .iter()
            .map(|slug| {
                format!(
                    r#"<li><a href="{}">Daily Math - {}</a></li>"#,
                    html_escape(&SiteLayout::page_href(slug)),
                    html_escape(slug.as_str())
                )
            })
            .collect::<Vec<_>>()
            .join("\n        ")
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8"/><meta name="viewport" content="width=device-width, initial-scale=1"/>
  <title>{title}</title>
  <meta name="description" content="Five new, kid-friendly math problems every day in English and French, with hints and answers."/>
  <link rel="stylesheet" href="styles.css"/>
</head>
<body>
  <header>{title}</header>
  <main class="container">
    <section class="hero">
      <h1>Practice a little every day</h1>
      <p>Five kid-friendly math problems posted daily, in English and French. Simple, positive, and free.</p>
      <p><strong>Latest:</strong> {latest}</p>
    </section>
    <section>
      <h2>Recent days</h2>
      <ul class="list">
        {list}
      </ul>
    </section>
  </main>
  {footer}
</body></html>
"#,
        title = title,
        latest = latest,
        list = list,
        footer = footer(year),
    )
}

/// Client-side behaviour of a daily page
///
/// Speech playback, hint/answer reveal, and a practice streak kept in
/// `localStorage`.
pub fn practice_script() -> &'static str {
    r#"(function () {
  var root = document.getElementById('worksheet');
  var content = root.querySelector('.content');

  // Hide everything between a Hints/Answers heading and the next heading of the same level
  function collect(pattern) {
    var groups = [];
    content.querySelectorAll('h2, h3').forEach(function (heading) {
      if (!pattern.test(heading.textContent)) return;
      var level = Number(heading.tagName.substring(1));
      var node = heading.nextElementSibling;
      while (node && !(/^H[1-6]$/.test(node.tagName) && Number(node.tagName.substring(1)) <= level)) {
        groups.push(node);
        node = node.nextElementSibling;
      }
    });
    groups.forEach(function (el) { el.hidden = true; });
    return groups;
  }

  function wireToggle(buttonId, pattern, showLabel, hideLabel) {
    var button = document.getElementById(buttonId);
    var nodes = collect(pattern);
    if (nodes.length === 0) { button.hidden = true; return; }
    button.addEventListener('click', function () {
      var reveal = button.getAttribute('aria-pressed') !== 'true';
      nodes.forEach(function (el) { el.hidden = !reveal; });
      button.setAttribute('aria-pressed', String(reveal));
      button.textContent = reveal ? hideLabel : showLabel;
    });
  }

  wireToggle('toggle-hints', /hint|indice/i, 'Show hints', 'Hide hints');
  wireToggle('toggle-answers', /answer|réponse/i, 'Show answers', 'Hide answers');

  var read = document.getElementById('read-aloud');
  var stop = document.getElementById('stop-reading');
  if (!('speechSynthesis' in window)) {
    read.hidden = true;
    stop.hidden = true;
  } else {
    read.addEventListener('click', function () {
      window.speechSynthesis.cancel();
      var selection = String(window.getSelection());
      var text = selection.trim() ? selection : content.innerText;
      var utterance = new SpeechSynthesisUtterance(text);
      utterance.lang = document.getElementById('voice-lang').value;
      utterance.rate = 0.9;
      window.speechSynthesis.speak(utterance);
    });
    stop.addEventListener('click', function () { window.speechSynthesis.cancel(); });
  }

  var KEY = 'dailyMathStreak';
  var countEl = document.getElementById('streak-count');
  var statusEl = document.getElementById('practice-status');

  function isoDay(d) {
    return d.getFullYear() + '-' + String(d.getMonth() + 1).padStart(2, '0') + '-' + String(d.getDate()).padStart(2, '0');
  }

  function load() {
    try { return JSON.parse(localStorage.getItem(KEY)) || { last: null, count: 0, solved: {} }; }
    catch (e) { return { last: null, count: 0, solved: {} }; }
  }

  var state = load();
  countEl.textContent = state.count;

  document.getElementById('practice-form').addEventListener('submit', function (event) {
    event.preventDefault();
    var now = new Date();
    var today = isoDay(now);
    var yesterday = isoDay(new Date(now.getFullYear(), now.getMonth(), now.getDate() - 1));
    if (state.last !== today) {
      state.count = state.last === yesterday ? state.count + 1 : 1;
      state.last = today;
    }
    state.solved = state.solved || {};
    state.solved[root.dataset.date] = Number(document.getElementById('solved').value) || 0;
    try { localStorage.setItem(KEY, JSON.stringify(state)); } catch (e) {}
    countEl.textContent = state.count;
    statusEl.textContent = 'Great work! Come back tomorrow to keep your streak.';
  });
})();"#
}
