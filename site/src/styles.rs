//! CSS for the page.
//!
//! Inlined into a `<style>` element both by the client-side app and by
//! prerendered documents. The stylesheet avoids `<`, `>` and `&` so it survives
//! text escaping unchanged.

/// Complete stylesheet: light theme, blue accent, breakpoint at 768px.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-muted: #f9fafb;
    --bg-dark: #111827;
    --text: #111827;
    --text-muted: #4b5563;
    --text-faint: #9ca3af;
    --border: #e5e7eb;
    --accent: #2563eb;
    --accent-dark: #1d4ed8;
    --accent-soft: #eff6ff;
    --radius: 16px;
    --container-max: 1280px;
    --font-sans: Inter, system-ui, -apple-system, sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { font-family: var(--font-sans); color: var(--text); background: var(--bg); line-height: 1.5; }
a { color: inherit; text-decoration: none; }
img { display: block; max-width: 100%; height: auto; }

.container { max-width: var(--container-max); margin: 0 auto; padding: 0 24px; }
.page { min-height: 100vh; }

.nav {
    position: fixed; top: 0; width: 100%; z-index: 40;
    background: rgba(255, 255, 255, 0.8); backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
}
.nav-inner {
    max-width: var(--container-max); margin: 0 auto; padding: 16px 24px;
    display: flex; align-items: center; justify-content: space-between;
}
.nav-brand { display: flex; align-items: center; gap: 12px; }
.nav-logo { border-radius: 8px; }
.nav-title { font-size: 1.5rem; font-weight: 700; }
.nav-links { display: flex; align-items: center; gap: 24px; }
.nav-link { color: var(--text-muted); transition: color 0.2s; }
.nav-link:hover { color: var(--text); }
.nav-cta { padding: 8px 16px; background: var(--accent); color: #fff; border-radius: 8px; }
.nav-cta:hover { background: var(--accent-dark); }

.classic-header { background: var(--accent); color: #fff; padding: 16px 0; }
.classic-header-inner { display: flex; align-items: center; justify-content: space-between; }
.classic-title { font-size: 1.5rem; font-weight: 700; }
.classic-links { display: flex; gap: 16px; list-style: none; }
.classic-link:hover { color: #bfdbfe; }

.hero { padding: 128px 0 80px; }
.classic-header + main .hero { padding-top: 64px; }
.hero-grid { display: grid; gap: 48px; align-items: center; }
.hero-badge {
    display: inline-block; padding: 8px 16px; margin-bottom: 24px;
    background: var(--accent-soft); color: var(--accent);
    border-radius: 999px; font-size: 0.875rem; font-weight: 600;
}
.hero-title { font-size: 3rem; font-weight: 700; line-height: 1.15; margin-bottom: 24px; }
.hero-title-accent { color: var(--accent); }
.hero-description { font-size: 1.25rem; color: var(--text-muted); margin-bottom: 32px; }
.hero-actions { display: flex; gap: 16px; flex-wrap: wrap; }
.hero-art {
    padding: 32px; border-radius: 24px;
    background: linear-gradient(135deg, #dbeafe, #f3e8ff);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
}
.hero-image { border-radius: var(--radius); }

.btn {
    display: inline-block; padding: 16px 32px; border-radius: 8px;
    font-weight: 600; border: 2px solid transparent; cursor: pointer;
    font-size: 1rem; transition: background 0.2s, border-color 0.2s;
}
.btn-primary { background: var(--accent); color: #fff; }
.btn-primary:hover { background: var(--accent-dark); }
.btn-secondary { border-color: #d1d5db; color: #374151; }
.btn-secondary:hover { border-color: var(--text-faint); }
.btn-light { background: #fff; color: var(--accent); }
.btn-light:hover { background: #f3f4f6; }
.btn-outline { border-color: #fff; color: #fff; }
.btn-outline:hover { background: var(--accent-dark); }

.section-header { text-align: center; margin-bottom: 64px; }
.section-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 16px; }
.section-description { font-size: 1.25rem; color: var(--text-muted); }

.features, .tech { padding: 80px 0; background: var(--bg-muted); }
.features-grid, .steps-grid, .tech-grid { display: grid; gap: 32px; grid-template-columns: 1fr; }
.feature-card {
    text-align: left; font: inherit; color: inherit; cursor: pointer;
    background: #fff; border: none; border-radius: var(--radius); padding: 32px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
    transition: box-shadow 0.2s, transform 0.2s;
}
.feature-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12); transform: translateY(-4px); }
.feature-card:focus-visible { outline: 2px solid var(--accent); outline-offset: 2px; }
.feature-icon { font-size: 3rem; margin-bottom: 16px; }
.feature-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 12px; }
.feature-description { color: var(--text-muted); margin-bottom: 16px; }
.feature-more { color: var(--accent); font-size: 0.875rem; font-weight: 600; }

.steps { padding: 80px 0; }
.steps-grid { list-style: none; }
.step { text-align: center; }
.step-number {
    width: 64px; height: 64px; margin: 0 auto 16px; border-radius: 50%;
    display: flex; align-items: center; justify-content: center;
    background: var(--accent); color: #fff; font-size: 1.5rem; font-weight: 700;
}
.step-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 8px; }
.step-text { color: var(--text-muted); }

.tech-card { background: #fff; padding: 32px; border-radius: var(--radius); box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08); }
.tech-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 12px; }
.tech-text { color: var(--text-muted); }

.cta { padding: 80px 0; background: var(--accent); color: #fff; }
.cta-inner { max-width: 896px; text-align: center; }
.cta-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 24px; }
.cta-description { font-size: 1.25rem; color: #dbeafe; margin-bottom: 32px; }
.cta-actions { display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; }

.footer { background: var(--bg-dark); color: var(--text-faint); padding: 48px 0; }
.footer-grid { display: grid; gap: 32px; margin-bottom: 32px; }
.footer-brand { display: flex; align-items: center; gap: 8px; margin-bottom: 16px; }
.footer-logo { border-radius: 8px; }
.footer-title { color: #fff; font-weight: 700; font-size: 1.25rem; }
.footer-tagline { font-size: 0.875rem; }
.footer-heading { color: #fff; font-weight: 600; margin-bottom: 16px; }
.footer-links { list-style: none; display: grid; gap: 8px; font-size: 0.875rem; }
.footer-link:hover { color: #fff; }
.footer-copyright { border-top: 1px solid #1f2937; padding-top: 32px; text-align: center; font-size: 0.875rem; }

.modal-backdrop {
    position: fixed; inset: 0; z-index: 50; padding: 16px;
    display: flex; align-items: center; justify-content: center;
    background: rgba(0, 0, 0, 0.5); backdrop-filter: blur(4px);
}
.modal-backdrop[data-dismiss=backdrop] { cursor: pointer; }
.modal-panel {
    position: relative; width: 100%; max-width: 672px; cursor: auto;
    background: #fff; border-radius: 24px; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.modal-close-x {
    position: absolute; top: 16px; right: 16px;
    background: none; border: none; cursor: pointer;
    font-size: 1.875rem; font-weight: 700; line-height: 1; color: var(--text-faint);
}
.modal-close-x:hover { color: var(--text); }
.modal-body { padding: 32px; max-width: 512px; }
.modal-heading { display: flex; align-items: center; margin-bottom: 16px; }
.modal-icon { font-size: 3rem; margin-right: 16px; }
.modal-title { font-size: 1.875rem; font-weight: 700; }
.modal-detail { font-size: 1.125rem; color: var(--text-muted); line-height: 1.7; margin-bottom: 24px; }
.modal-close { width: 100%; padding: 12px 24px; }

@media (min-width: 768px) {
    .hero-grid, .footer-grid { grid-template-columns: repeat(2, 1fr); }
    .features-grid, .steps-grid, .tech-grid { grid-template-columns: repeat(3, 1fr); }
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .hero-title { font-size: 3.75rem; }
}
"#;

#[cfg(test)]
mod tests {
    use super::SITE_CSS;

    #[test]
    fn survives_text_escaping() {
        assert!(!SITE_CSS.contains(['<', '>', '&']));
    }

    #[test]
    fn styles_every_overlay_part() {
        for class in [".modal-backdrop", ".modal-panel", ".modal-close-x", ".modal-close"] {
            assert!(SITE_CSS.contains(class), "missing {class}");
        }
    }
}
