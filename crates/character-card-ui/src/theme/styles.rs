//! Stylesheet for the character card.
//!
//! Pixel sizes, radii and colors here are the card's acceptance contract.

pub const CARD_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* STATUS */
  --status-alive: #55cc44;
  --status-dead: #d63d2e;
  --status-unknown: #9e9e9e;

  /* TEXT */
  --card-text: #000000;
  --card-text-secondary: #4f4f4f;
  --card-text-muted: #828282;

  /* SURFACES */
  --card-border: #e0e0e0;
  --card-badge: #f2f2f2;

  /* Transitions */
  --card-transition: 150ms ease;
}

/* === Card === */
.card {
  display: flex;
  position: relative;
  min-width: 326px;
  max-height: 140px;
  margin: 5px;
}

.card--empty {
  height: 140px;
  border: 1px dashed #e0e0e0;
  border-radius: 10px;
}

.card__image {
  width: 140px;
  height: 140px;
  flex-shrink: 0;
  object-fit: cover;
  border-top-left-radius: 10px;
  border-bottom-left-radius: 10px;
}

/* === Favorite Badge === */
.card__favorite {
  width: 30px;
  height: 30px;
  left: 101px;
  top: 105px;
  position: absolute;
  background: #f2f2f2;
  border-radius: 9999px;
  cursor: pointer;
}

.card__star-container {
  width: 18px;
  height: 18px;
  left: 107px;
  top: 111px;
  position: absolute;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
}

.card__star {
  font-size: 16px;
  line-height: 18px;
  color: var(--card-text-muted);
  transition: color var(--card-transition);
}

.card__star--on {
  color: #f2c94c;
}

/* === Content === */
.card__content {
  flex: 3 1 0%;
  position: relative;
  padding: 0.5rem;
  display: flex;
  flex-direction: column;
  color: #000000;
  border-top-right-radius: 10px;
  border-bottom-right-radius: 10px;
  border: 1px solid #e0e0e0;
  font-size: 10px;
}

.card-content__section {
  flex: 1 1 0%;
  display: flex;
  flex-direction: column;
  justify-content: center;
}

/* === Status === */
.card__status-line {
  display: flex;
  flex-direction: row;
  align-items: center;
}

.card__status {
  height: 0.5rem;
  width: 0.5rem;
  margin-right: 0.375rem;
  border-radius: 50%;
}

.card__status--alive {
  background-color: var(--status-alive);
}

.card__status--dead {
  background-color: var(--status-dead);
}

.card__status--unknown {
  background-color: var(--status-unknown);
}

.card__status-species {
  color: #4f4f4f;
  font-size: 10px;
}

/* === Text === */
.card__character-name {
  font-size: 16px;
  font-weight: 700;
  margin: 0;
}

.card__label {
  color: #828282;
}

.card__field {
  font-size: 12px;
}
"#;
