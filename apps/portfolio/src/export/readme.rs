use chrono::{DateTime, TimeZone};

use crate::models::Portfolio;

/// Builds the README.md shipped in every bundle: when it was generated and how
/// to edit, preview and publish the site.
pub fn render_readme<Tz>(portfolio: &Portfolio, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let heading = match portfolio.name.trim() {
        "" => "# Static Portfolio".to_string(),
        name => format!("# {name} - Static Portfolio"),
    };
    let timestamp = generated_at.format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"{heading}

Generated on {timestamp}.

## Contents

- `index.html` - page skeleton
- `styles.css` - site styles
- `script.js` - renders the page from `data.json`
- `data.json` - all of your portfolio content
- `assets/` - uploaded images, if any

## Updating your portfolio

Everything on the page comes from `data.json`. Edit it, save, and reload:
no HTML changes are needed. Keep the file valid JSON (no trailing commas).

- `sections` controls which blocks are shown: `about`, `experience`,
  `publications`, `projects`. An empty list shows all of them.
- Publications are grouped by their `year` value, newest first.
- Image fields (`profileImage`, `image`) are paths relative to this folder,
  for example `assets/photo.png`.

You can also load `data.json` back into the generator with "Import JSON",
edit it in the form, and download a fresh bundle.

## Viewing locally

Browsers block `fetch` on `file://` pages, so serve the folder over HTTP:

```sh
python3 -m http.server 8000
```

Then open http://localhost:8000.

## Publishing

Upload the whole folder to any static host:

1. GitHub Pages: push the files to a repository and enable Pages.
2. Netlify or Vercel: drag and drop the folder, or connect the repository.
3. Your own web server: copy the files into the document root.
"#
    )
}
