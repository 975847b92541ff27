//! Shared page layout.

use crate::escape_html;

/// Navigation entries shown on every page: `(path, label)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("/tablas", "Tablas"),
    ("/reporte", "Ventas por producto"),
    ("/reporte-televisores", "Televisores"),
    ("/reporte-clientes-10m", "Clientes &gt; 10M"),
];

const STYLE: &str = "
:root{--brand:#2563eb;--accent:#7c3aed;--bg:#f6f8fb;--card:#fff;--text:#0f172a;--muted:#6b7280;--border:#e5e7eb;--hover:#eff6ff}
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif;background:var(--bg);color:var(--text)}
.topbar{background:linear-gradient(90deg,var(--brand),var(--accent));color:#fff}
.topbar .wrap{max-width:1100px;margin:0 auto;padding:14px 20px;display:flex;align-items:center;gap:18px}
.brand{font-weight:800}
nav a{color:#ffffffcc;text-decoration:none;margin-right:10px;padding:8px 12px;border-radius:12px}
nav a.active{background:#ffffff33;color:#fff}
.container{max-width:1100px;margin:28px auto;padding:0 20px}
.card{background:var(--card);border:1px solid var(--border);border-radius:18px;overflow:hidden}
.head{padding:18px 20px;border-bottom:1px solid var(--border)}
h1{font-size:1.25rem;margin:0}
.subtitle{color:var(--muted);font-size:.95rem;margin-top:6px}
.pad{padding:16px}
.table-wrap{overflow-x:auto}
table{border-collapse:separate;border-spacing:0;width:100%}
th,td{padding:12px 14px;border-bottom:1px solid var(--border);text-align:left;white-space:nowrap}
thead th{background:var(--hover);font-weight:600}
td.money{text-align:right;font-variant-numeric:tabular-nums}
";

/// A titled page body, rendered inside the shared layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub subtitle: Option<String>,
    /// Trusted HTML; callers escape any data they put here.
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            body: body.into(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Renders the full document. `current_path` selects the active nav link.
    pub fn render(&self, current_path: &str) -> String {
        let title = escape_html(&self.title);
        let subtitle = self
            .subtitle
            .as_deref()
            .map(|s| format!(r#"<div class="subtitle">{}</div>"#, escape_html(s)))
            .unwrap_or_default();

        let nav: String = NAV_LINKS
            .iter()
            .map(|(path, label)| {
                let class = if is_active(current_path, path) {
                    r#" class="active""#
                } else {
                    ""
                };
                format!(r#"<a{class} href="{path}">{label}</a>"#)
            })
            .collect();

        format!(
            r#"<!doctype html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<style>{STYLE}</style>
</head>
<body>
<header class="topbar"><div class="wrap"><div class="brand">Reportes</div><nav>{nav}</nav></div></header>
<main class="container">
<section class="card">
<div class="head"><h1>{title}</h1>{subtitle}</div>
<div class="table-wrap">{body}</div>
</section>
</main>
</body>
</html>
"#,
            body = self.body,
        )
    }
}

/// A link is active on its own path and on paths nested below it.
fn is_active(current_path: &str, link: &str) -> bool {
    current_path == link
        || current_path
            .strip_prefix(link)
            .is_some_and(|rest| rest.starts_with('/'))
}
