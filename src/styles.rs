/// Page stylesheet. `.dark-mode` on the root container swaps the palette
/// for every descendant through the custom properties below.
pub const STYLES: &str = r#"
.landing-page {
    --bg: #ffffff;
    --bg-alt: #f3f4f6;
    --card: #ffffff;
    --text: #111827;
    --muted: #4b5563;
    --accent: #2563eb;
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    transition: background 0.3s ease, color 0.3s ease;
}
.landing-page.dark-mode {
    --bg: #111827;
    --bg-alt: #1f2937;
    --card: #374151;
    --text: #f9fafb;
    --muted: #d1d5db;
}
.top-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem;
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
}
.nav-links {
    display: flex;
    justify-content: center;
    gap: 1.5rem;
    width: 100%;
}
.nav-link {
    background: none;
    border: none;
    color: var(--muted);
    cursor: pointer;
    font-size: 1rem;
}
.nav-link:hover {
    color: var(--accent);
}
.theme-toggle {
    background: var(--accent);
    color: #ffffff;
    border: none;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    cursor: pointer;
    white-space: nowrap;
}
.hero {
    text-align: center;
    padding: 2.5rem 1rem;
}
.hero .logo {
    max-width: 240px;
    margin: 0 auto 1rem;
}
.hero h1 {
    font-size: 2.25rem;
}
.section {
    padding: 5rem 1rem;
    text-align: center;
}
.section.alt {
    background: var(--bg-alt);
}
.section h2 {
    font-size: 1.875rem;
    margin-bottom: 2.5rem;
}
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 2rem;
    max-width: 1100px;
    margin: 0 auto;
}
.tile {
    perspective: 1000px;
    height: 220px;
}
.tile-inner {
    position: relative;
    width: 100%;
    height: 100%;
    background: var(--card);
    border-radius: 0.75rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
    transition: transform 0.6s;
    transform-style: preserve-3d;
}
.tile-inner.flipped {
    transform: rotateY(180deg);
}
.tile-front,
.tile-back {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    backface-visibility: hidden;
}
.tile-back {
    transform: rotateY(180deg);
    color: var(--muted);
}
.icon {
    width: 2.5rem;
    height: 2.5rem;
    color: var(--accent);
}
.approach-list {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 2.5rem;
    max-width: 1100px;
    margin: 0 auto;
    text-align: left;
}
.approach-step {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}
.approach-step p {
    color: var(--muted);
}
.team-intro {
    font-size: 1.125rem;
    max-width: 720px;
    margin: 0 auto 2.5rem;
}
.team-member {
    position: relative;
    width: 10rem;
    height: 10rem;
    margin: 0 auto;
    overflow: hidden;
    border-radius: 50%;
}
.team-photo {
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.member-overlay {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0.75rem;
    background: rgba(0, 0, 0, 0.75);
    color: #ffffff;
    opacity: 0;
    transition: opacity 0.3s;
}
.member-overlay.visible {
    opacity: 1;
}
.member-title,
.member-description {
    color: #d1d5db;
    font-size: 0.8rem;
}
.member-link {
    color: #60a5fa;
    margin-top: 0.5rem;
}
.footer {
    background: #1f2937;
    color: #ffffff;
    padding: 1.5rem 1rem;
    text-align: center;
}
.footer .nav-links {
    margin-top: 0.5rem;
}
.footer .nav-link {
    color: #9ca3af;
}
.footer .nav-link:hover {
    color: #ffffff;
}
"#;
