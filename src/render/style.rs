//! Page stylesheet

pub const STYLESHEET: &str = r#"
:root {
    --primary: #26A69A;
    --primary-light: #4DB6AC;
    --accent: #FF6F61;
    --accent-light: #FF8A80;
    --light: #e6f3f5;
    --dark: #2c3e50;
    --deep-blue: #1E3A8A;
}
html { scroll-behavior: smooth; }
body {
    background-color: var(--light);
    font-family: 'Inter', Arial, sans-serif;
    color: var(--dark);
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}
main { max-width: 1100px; margin: 0 auto; padding: 0 1rem 5rem; }
h1, h2, h3, h4 {
    font-family: 'Playfair Display', serif;
    color: var(--deep-blue);
    text-shadow: 0 1px 2px rgba(0,0,0,0.1);
}
h1 { font-size: 2.2rem; }
h2 { font-size: 1.8rem; }
h3 { font-size: 1.4rem; }
h4 { font-size: 1.2rem; }
.site-header, .hero {
    text-align: center;
    padding: 0.8rem;
    color: white;
}
.site-header { background: var(--primary); }
.site-header h1, .hero h1 { color: white; }
.hero {
    background: linear-gradient(rgba(38,166,154,0.9), rgba(77,182,172,0.9));
    border-radius: 8px;
    margin-top: 0.5rem;
}
.hero img, .gallery img {
    width: 100%;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.2);
}
.hero img { max-width: 600px; }
.gallery img { max-width: 400px; }
nav.site-nav {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.8rem;
    padding: 0.5rem;
    background: white;
    position: sticky;
    top: 0;
    z-index: 900;
}
nav.site-nav a { color: var(--deep-blue); text-decoration: none; }
.panel {
    background: white;
    padding: 0.8rem;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}
.service-card, .testimonial-card, .event-card, .partnership-card, .blog-card,
.tracker-card, .volunteer-card, .founder-card {
    background: white;
    padding: 0.8rem;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    margin-bottom: 0.5rem;
}
.primary-btn, button {
    background: linear-gradient(135deg, var(--primary), var(--primary-light));
    color: white;
    padding: 0.5rem 1rem;
    border-radius: 20px;
    border: none;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.3s ease;
    text-decoration: none;
    display: inline-block;
    font-size: 0.9rem;
}
.primary-btn:hover, button:hover {
    background: linear-gradient(135deg, var(--accent), var(--accent-light));
    transform: translateY(-2px);
}
.button-row {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    flex-wrap: wrap;
    margin-top: 0.5rem;
}
.learn-more {
    border: 1px solid #e0e0e0;
    border-radius: 8px;
    background: #f9f9f9;
    margin: 0.5rem 0;
    padding: 0.5rem;
}
.learn-more summary { cursor: pointer; font-weight: 600; }
form.site-form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    background: white;
    padding: 0.8rem;
    border-radius: 8px;
    margin: 0.5rem 0;
}
form.site-form label { display: flex; flex-direction: column; font-size: 0.9rem; }
form.site-form input, form.site-form select, form.site-form textarea {
    padding: 0.4rem;
    border: 1px solid #e0e0e0;
    border-radius: 6px;
    margin-top: 0.2rem;
}
.flash { padding: 0.6rem; border-radius: 6px; margin: 0.5rem 0; }
.flash-success { background: #e0f2f1; border-left: 4px solid var(--primary); }
.flash-error { background: #fdecea; border-left: 4px solid var(--accent); }
.mood-history { list-style: none; padding-left: 0; }
.footer {
    text-align: center;
    padding: 1rem;
    background: #e8f4f8;
    border-top: 1px solid #ddd;
    margin-top: 1rem;
}
.newsletter { display: flex; gap: 0.3rem; justify-content: center; max-width: 360px; margin: 0.5rem auto; }
.chatbot {
    position: fixed;
    bottom: 20px;
    right: 20px;
    z-index: 1000;
}
.chatbot summary {
    list-style: none;
    margin-left: auto;
    background: linear-gradient(135deg, var(--primary), var(--primary-light));
    color: white;
    border-radius: 50%;
    width: 50px;
    height: 50px;
    font-size: 1.2rem;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 2px 4px rgba(0,0,0,0.2);
}
.chatbot-panel {
    width: 300px;
    max-height: 400px;
    overflow-y: auto;
    background: white;
    padding: 1rem;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.2);
    margin-bottom: 0.5rem;
}
.chatbot-message { padding: 0.5rem; margin: 0.5rem 0; border-radius: 6px; font-size: 0.9rem; }
.chatbot-message.user { background: #e8f4f8; text-align: right; }
.chatbot-message.bot { background: white; color: var(--primary); border-left: 3px solid var(--primary); }
.chatbot-input { width: 100%; padding: 0.5rem; border: 1px solid #e0e0e0; border-radius: 6px; }
@media (max-width: 768px) {
    h1 { font-size: 1.6rem; }
    h2 { font-size: 1.4rem; }
    h3 { font-size: 1.2rem; }
    h4 { font-size: 1.0rem; }
    .chatbot { right: 5%; }
    .chatbot-panel { width: 90vw; max-height: 300px; }
    img { max-width: 100%; height: auto; }
}
"#;
