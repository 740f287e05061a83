//! The injected theme-override stylesheet.
//!
//! The selectors target Tailwind utility class names that already exist in
//! the host page's markup, so this text is part of the contract with the
//! page's own stylesheet: renaming classes there breaks the overrides here.

/// Id of the injected `<style>` element; injection is skipped if present.
pub const STYLE_ELEMENT_ID: &str = "blog-ui-style";

/// CSS applied while `html.bw` is active, plus the toggle button states and
/// an `.sr-only` accessibility fallback.
pub const BW_OVERRIDE_CSS: &str = r"
   /* Ensure media are not affected when switching theme */
   html.bw img, html.bw picture, html.bw video, html.bw svg {
      filter: none !important;
      opacity: 1 !important;
      background: transparent !important;
   }

   /* Body defaults (the site starts dark) -> light equivalents when bw active */
   html.bw body, html.bw .min-h-screen {
      background-color: #ffffff !important;
      color: #0b0b0d !important;
   }

   /* override common explicit text/util classes used in markup */
   html.bw .text-\[\#e9eef1\], html.bw .text-white {
      color: #0b0b0d !important;
   }

   /* cards / panel dark backgrounds -> subtle light backgrounds */
   html.bw .bg-\[\#0b0b0d\] {
      background-color: #ffffff !important;
   }
   html.bw .bg-\[\#18181b\] {
      /* keep cards separated from the body with a very light neutral */
      background-color: #fafafa !important;
   }

   /* borders that were dark -> light gray in bw mode */
   html.bw .border-\[\#232325\] {
      border-color: #e6e6e6 !important;
   }

   /* muted text in dark -> muted dark in light mode */
   html.bw .text-\[\#fffde4\], html.bw .text-\[\#fffde4\]\/80 {
      color: #3a3a3a !important;
   }

   /* gold accents (.text-[#f2c94c], .bg-[#b08a13]) stay untouched */

   /* toolbar button fine tuning for both states */
   .bw-toggle-btn-on {
      background-color: #ffffff !important;
      color: #0b0b0d !important;
      border-color: #d1d1d1 !important;
   }
   .bw-toggle-btn-off {
      background-color: #0b0b0d !important;
      color: #f5f7f8 !important;
      border-color: #232325 !important;
   }

   /* accessibility fallback for sr-only */
   .sr-only {
      position: absolute !important;
      height: 1px; width: 1px;
      overflow: hidden;
      clip: rect(1px, 1px, 1px, 1px);
      white-space: nowrap;
   }
";

/// Insert the override stylesheet into `<head>`, once.
pub fn inject_bw_style() {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    if doc.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(BW_OVERRIDE_CSS));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}
