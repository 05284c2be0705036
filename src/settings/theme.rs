//! Theme stylesheet rendering.

use crate::settings::domain::Customization;
use minijinja::Environment;

const THEME_TEMPLATE: &str = r":root {
  --primary-color: {{ colors.primary }};
  --secondary-color: {{ colors.secondary }};
  --accent-color: {{ colors.accent }};
  --background-color: {{ colors.background }};
  --success-color: {{ colors.success }};
  --warning-color: {{ colors.warning }};
  --error-color: {{ colors.error }};
  --info-color: {{ colors.info }};
}

.custom-primary {
  background-color: var(--primary-color) !important;
}

.custom-secondary {
  background-color: var(--secondary-color) !important;
}

.custom-accent {
  background-color: var(--accent-color) !important;
}

.custom-text-primary {
  color: var(--primary-color) !important;
}

.custom-border-primary {
  border-color: var(--primary-color) !important;
}

.sidebar-{{ layout.sidebarPosition }} {
  order: {% if layout.sidebarPosition == 'right' %}2{% else %}0{% endif %};
}

.header-{{ layout.headerStyle }} {
  position: {{ layout.headerStyle }};
{%- if layout.headerStyle == 'fixed' %}
  top: 0;
  z-index: 1000;
{%- endif %}
}

.content-{{ layout.contentWidth }} {
  max-width: {% if layout.contentWidth == 'full' %}100%{% elif layout.contentWidth == 'narrow' %}1024px{% else %}1280px{% endif %};
  margin: 0 auto;
}

.cards-grid-{{ layout.cardsPerRow }} {
  grid-template-columns: repeat({{ layout.cardsPerRow }}, 1fr);
}

.card-{{ layout.cardStyle }} {
{%- if layout.cardStyle == 'elevated' %}
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
{%- elif layout.cardStyle == 'outlined' %}
  border: 1px solid #e5e7eb;
{%- else %}
  box-shadow: none;
{%- endif %}
}
";

/// Renders CSS custom properties and layout classes for `settings`.
///
/// # Errors
///
/// Returns the template engine error when rendering fails.
pub fn render_stylesheet(settings: &Customization) -> Result<String, minijinja::Error> {
    Environment::new().render_str(THEME_TEMPLATE, settings)
}
