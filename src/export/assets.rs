//! Static stylesheet and script for the HTML export
//!
//! The exported page is a two-column layout: a sticky table of contents on
//! the left and the conversation on the right. The script only uses the class
//! and id hooks the renderer emits (`toc-sidebar`, `toc-q`, `toc-h2`,
//! `question`, `question-text`, `answer`, `Q<n>` and heading slugs).

/// External font stylesheets.
pub const FONT_LINKS: &str = r#"<link rel="preconnect" href="https://rsms.me/">
    <link rel="stylesheet" href="https://rsms.me/inter/inter.css">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@fontsource/jetbrains-mono@5/index.css">"#;

/// Theme CSS (light by default, dark via `prefers-color-scheme`).
pub const STYLE_CSS: &str = r#"
/* Theme colors */
:root {
    --bg: #ffffff;
    --bg-sidebar: #f6f7f9;
    --text: #1f2328;
    --text-muted: #59636e;
    --accent: #5a67d8;
    --border: #d8dee4;
    --quote-bg: #f2f4fb;
    --quote-border: #5a67d8;
    --code-bg: #f6f8fa;
    --code-inline-bg: #eff1f3;
    --sidebar-width: 300px;
    --content-width: 860px;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #16181d;
        --bg-sidebar: #1c1f26;
        --text: #e6e8eb;
        --text-muted: #9aa3ad;
        --accent: #8b9cf7;
        --border: #2f343d;
        --quote-bg: #1f2330;
        --quote-border: #8b9cf7;
        --code-bg: #0f1115;
        --code-inline-bg: #262a33;
    }
}

/* Reset and base styles */
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
    scroll-padding-top: 1.5rem;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-size: 17px;
    line-height: 1.65;
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
}

/* Layout */
.container {
    display: grid;
    grid-template-columns: var(--sidebar-width) 1fr;
    min-height: 100vh;
}

/* Sidebar */
.toc-sidebar {
    position: sticky;
    top: 0;
    height: 100vh;
    overflow-y: auto;
    padding: 1.5rem 1rem;
    background: var(--bg-sidebar);
    border-right: 1px solid var(--border);
}

.toc-sidebar h2 {
    margin: 0 0 1rem;
    font-size: 1rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-muted);
}

.toc-sidebar ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.toc-sidebar a {
    display: block;
    padding: 0.3rem 0.6rem;
    border-radius: 6px;
    color: var(--text);
    text-decoration: none;
    overflow: hidden;
    text-overflow: ellipsis;
}

.toc-sidebar a:hover { background: var(--code-inline-bg); }
.toc-sidebar a.active { background: var(--accent); color: #ffffff; }
.toc-q { font-weight: 700; margin-top: 1rem; }
.toc-h2 { padding-left: 1.5rem !important; font-size: 0.9rem; color: var(--text-muted) !important; }

/* Main content */
.main-content {
    padding: 2rem;
    min-width: 0;
}

.header, .content {
    max-width: var(--content-width);
    margin: 0 auto;
}

.header {
    padding-bottom: 1rem;
    margin-bottom: 2rem;
    border-bottom: 1px solid var(--border);
}

.header h1 { margin: 0 0 0.5rem; font-size: 2rem; line-height: 1.2; }
.header .meta { color: var(--text-muted); font-size: 0.9rem; }

h2 { font-size: 1.45rem; margin: 2.2rem 0 1rem; }
h3 { font-size: 1.2rem; margin: 1.8rem 0 0.8rem; }
p { margin: 0 0 1.2rem; }
a { color: var(--accent); }

/* Code */
code {
    font-family: 'JetBrains Mono', 'Fira Code', Consolas, monospace;
}

:not(pre) > code {
    background: var(--code-inline-bg);
    padding: 0.15em 0.4em;
    border-radius: 4px;
    font-size: 0.85em;
}

.code-wrapper {
    position: relative;
    margin-bottom: 1.2rem;
}

pre {
    margin: 0;
    padding: 1rem 1.2rem;
    overflow-x: auto;
    background: var(--code-bg);
    border: 1px solid var(--border);
    border-radius: 8px;
    font-size: 0.88rem;
    line-height: 1.5;
}

table {
    border-collapse: collapse;
    margin-bottom: 1.2rem;
}

th, td {
    padding: 0.4rem 0.8rem;
    border: 1px solid var(--border);
}

/* Blockquotes and questions */
blockquote {
    margin: 0 0 1.2rem;
    padding: 0.5rem 1.2rem;
    border-left: 4px solid var(--border);
    color: var(--text-muted);
}

.question {
    position: relative;
    margin: 2.5rem 0 1.5rem;
}

.question blockquote {
    margin: 0;
    padding: 1.2rem 1.8rem;
    background: var(--quote-bg);
    border-left: 4px solid var(--quote-border);
    border-radius: 0 8px 8px 0;
    color: var(--text);
}

.question strong {
    display: block;
    color: var(--accent);
    margin-bottom: 0.25rem;
}

.question pre.question-text {
    padding: 0;
    background: none;
    border: none;
    white-space: pre-wrap;
    word-wrap: break-word;
    font-family: inherit;
    font-size: 1rem;
}

.separator { display: none; }

/* Copy buttons */
.copy-btn {
    position: absolute;
    top: 0.5rem;
    right: 0.5rem;
    padding: 0.2rem 0.6rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--bg);
    color: var(--text-muted);
    font-size: 0.75rem;
    cursor: pointer;
    opacity: 0;
    transition: opacity 0.15s;
}

.code-wrapper:hover .copy-btn,
.question:hover .copy-btn,
.copy-btn:focus-visible { opacity: 1; }

/* Mobile */
.menu-btn, .overlay { display: none; }

@media (max-width: 1024px) {
    .container { grid-template-columns: 1fr; }
    .toc-sidebar {
        position: fixed;
        z-index: 20;
        width: min(85vw, var(--sidebar-width));
        transform: translateX(-100%);
        transition: transform 0.2s;
    }
    .toc-sidebar.open { transform: translateX(0); }
    .main-content { padding: 1.25rem; }
    .menu-btn {
        display: block;
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        z-index: 30;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 50%;
        background: var(--accent);
        color: #ffffff;
        font-size: 1.3rem;
        cursor: pointer;
    }
    .overlay {
        display: block;
        position: fixed;
        inset: 0;
        z-index: 10;
        background: rgba(0, 0, 0, 0.4);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.2s;
    }
    .overlay.active { opacity: 1; pointer-events: auto; }
}
"#;

/// Sidebar toggle, scroll-spy and copy buttons.
pub const SCRIPT_JS: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
    const sidebar = document.querySelector('.toc-sidebar');
    const links = Array.from(document.querySelectorAll('.toc-sidebar a'));

    // Sidebar toggle on narrow screens
    const menuBtn = document.createElement('button');
    menuBtn.className = 'menu-btn';
    menuBtn.setAttribute('aria-label', 'Toggle table of contents');
    menuBtn.textContent = '☰';
    const overlay = document.createElement('div');
    overlay.className = 'overlay';
    document.body.append(menuBtn, overlay);

    const toggle = () => {
        const open = sidebar.classList.toggle('open');
        overlay.classList.toggle('active', open);
        menuBtn.textContent = open ? '✕' : '☰';
    };
    menuBtn.addEventListener('click', toggle);
    overlay.addEventListener('click', toggle);
    links.forEach(link => link.addEventListener('click', () => {
        if (sidebar.classList.contains('open')) toggle();
    }));

    // Scroll-spy
    const byId = new Map(links.map(link => [decodeURIComponent(link.hash.slice(1)), link]));
    const observer = new IntersectionObserver(entries => {
        entries.filter(entry => entry.isIntersecting).forEach(entry => {
            const link = byId.get(entry.target.id);
            if (!link) return;
            links.forEach(l => l.classList.remove('active'));
            link.classList.add('active');
            link.scrollIntoView({ block: 'nearest' });
        });
    }, { rootMargin: '-15% 0px -75% 0px' });
    byId.forEach((_, id) => {
        const target = document.getElementById(id);
        if (target) observer.observe(target);
    });

    // Copy buttons
    const addCopyButton = (host, getText) => {
        const btn = document.createElement('button');
        btn.className = 'copy-btn';
        btn.textContent = 'Copy';
        btn.addEventListener('click', () => {
            navigator.clipboard.writeText(getText()).then(() => {
                btn.textContent = 'Copied!';
                setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
            });
        });
        host.appendChild(btn);
    };

    document.querySelectorAll('.answer pre').forEach(pre => {
        const wrapper = document.createElement('div');
        wrapper.className = 'code-wrapper';
        pre.parentNode.insertBefore(wrapper, pre);
        wrapper.appendChild(pre);
        addCopyButton(wrapper, () => pre.innerText);
    });

    document.querySelectorAll('.question').forEach(question => {
        const text = question.querySelector('.question-text');
        addCopyButton(question, () => (text || question).innerText);
    });
});
"#;
