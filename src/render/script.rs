//! The browser half of the reveal model.
//!
//! Mirrors [`crate::motion::state::RevealToggle`]: a trigger root becomes
//! visible once its intersection ratio reaches `data-reveal`, and hides again
//! when it drops below unless `data-reveal-once` is set. Toggling a root also
//! toggles the motion members it owns (those whose nearest root it is), which
//! restarts their CSS animations with the precomputed `--motion-delay`.

use crate::render::css::{READY_CLASS, VISIBLE_CLASS};

const TEMPLATE: &str = r#"(() => {
  "use strict";
  const VISIBLE = "@VISIBLE@";
  const ROOTS = "[data-reveal], [data-reveal-on=\"mount\"]";
  const doc = document.documentElement;

  const members = (root) =>
    Array.from(root.querySelectorAll("[data-motion]")).filter(
      (el) => el.closest(ROOTS) === root
    );

  const toggle = (root, on) => {
    root.classList.toggle(VISIBLE, on);
    for (const el of members(root)) el.classList.toggle(VISIBLE, on);
  };

  const roots = Array.from(document.querySelectorAll(ROOTS));
  if (!("IntersectionObserver" in window)) {
    for (const root of roots) toggle(root, true);
    return;
  }
  doc.classList.add("@READY@");

  const scroller = document.querySelector(".scroll-container");
  const observers = new Map();
  const observerFor = (amount, margin) => {
    const key = amount + "|" + margin;
    if (!observers.has(key)) {
      const io = new IntersectionObserver(
        (entries) => {
          for (const entry of entries) {
            const root = entry.target;
            const inView = entry.isIntersecting && entry.intersectionRatio >= amount;
            const once = root.dataset.revealOnce === "true";
            if (inView) {
              toggle(root, true);
              if (once) io.unobserve(root);
            } else if (!once) {
              toggle(root, false);
            }
          }
        },
        { root: scroller, rootMargin: margin + "px", threshold: [0, amount] }
      );
      observers.set(key, io);
    }
    return observers.get(key);
  };

  for (const root of roots) {
    if (root.dataset.revealOn === "mount") {
      requestAnimationFrame(() => toggle(root, true));
      continue;
    }
    const amount = parseFloat(root.dataset.reveal) || 0;
    const margin = parseFloat(root.dataset.revealMargin || "0") || 0;
    observerFor(amount, margin).observe(root);
  }
})();
"#;

/// Contents of `motion.js`.
pub fn motion_script() -> String {
    TEMPLATE
        .replace("@VISIBLE@", VISIBLE_CLASS)
        .replace("@READY@", READY_CLASS)
}

#[cfg(test)]
#[path = "../../tests/unit/render/script.rs"]
mod tests;
