//! Static presentational assets: stylesheet and client behavior script.
//!
//! Both are idempotent when included more than once per page: the stylesheet
//! is pure CSS, and the behavior script installs itself behind a `window`
//! sentinel (a second evaluation only re-scans for new elements).

/// Structural stylesheet for toasts and popups.
pub const STYLESHEET: &str = r#"
.flashkit-toast {
    position: fixed;
    z-index: 9999;
    padding: 15px;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    max-width: 400px;
    min-width: 300px;
    opacity: 0;
    transform: translateY(-20px);
    transition: all 0.3s ease;
}

.flashkit-toast.flashkit-show {
    opacity: 1;
    transform: translateY(0);
}

.flashkit-top-right { top: 20px; right: 20px; }
.flashkit-top-left { top: 20px; left: 20px; }
.flashkit-bottom-right { bottom: 20px; right: 20px; }
.flashkit-bottom-left { bottom: 20px; left: 20px; }
.flashkit-top-center { top: 20px; left: 50%; transform: translateX(-50%); }
.flashkit-bottom-center { bottom: 20px; left: 50%; transform: translateX(-50%); }

.flashkit-toast-content {
    display: flex;
    align-items: center;
    gap: 10px;
}

.flashkit-icon {
    font-size: 18px;
    font-weight: bold;
}

.flashkit-message {
    flex: 1;
    font-size: 14px;
    line-height: 1.4;
}

.flashkit-close {
    background: none;
    border: none;
    font-size: 18px;
    cursor: pointer;
    opacity: 0.7;
    padding: 0;
    width: 20px;
    height: 20px;
}

.flashkit-close:hover { opacity: 1; }

.flashkit-success { background: #d4edda; color: #155724; border-left: 4px solid #28a745; }
.flashkit-error { background: #f8d7da; color: #721c24; border-left: 4px solid #dc3545; }
.flashkit-warning { background: #fff3cd; color: #856404; border-left: 4px solid #ffc107; }
.flashkit-info { background: #d1ecf1; color: #0c5460; border-left: 4px solid #17a2b8; }

.flashkit-overlay {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0,0,0,0.5);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 10000;
}

.flashkit-popup {
    background: white;
    border-radius: 12px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.3);
    max-width: 500px;
    width: 90%;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    opacity: 0;
    transform: scale(0.7);
    transition: all 0.3s ease;
}

.flashkit-popup.flashkit-show {
    opacity: 1;
    transform: scale(1);
}

.flashkit-popup-header {
    padding: 25px 25px 15px;
    text-align: center;
    border-bottom: 1px solid #eee;
}

.flashkit-popup-icon {
    display: inline-block;
    width: 60px;
    height: 60px;
    border-radius: 50%;
    line-height: 60px;
    font-size: 24px;
    color: white;
    margin-bottom: 15px;
}

.flashkit-popup.flashkit-success .flashkit-popup-icon { background: #28a745; }
.flashkit-popup.flashkit-error .flashkit-popup-icon { background: #dc3545; }
.flashkit-popup.flashkit-warning .flashkit-popup-icon { background: #ffc107; color: #333; }
.flashkit-popup.flashkit-info .flashkit-popup-icon { background: #17a2b8; }

.flashkit-popup-title {
    margin: 0;
    font-size: 24px;
    font-weight: 600;
    color: #333;
}

.flashkit-popup-content {
    padding: 20px 25px;
    text-align: center;
}

.flashkit-popup-content p {
    margin: 0;
    font-size: 16px;
    line-height: 1.5;
    color: #666;
}

.flashkit-popup-footer {
    padding: 15px 25px 25px;
    text-align: center;
}

.flashkit-popup-confirm {
    padding: 12px 30px;
    border: none;
    border-radius: 6px;
    font-size: 16px;
    font-weight: 500;
    cursor: pointer;
    background: #007bff;
    color: white;
    transition: all 0.3s ease;
}

.flashkit-popup-confirm:hover { background: #0056b3; }

.flashkit-fadeIn { animation: flashkitFadeIn 0.3s ease; }
.flashkit-slideIn { animation: flashkitSlideIn 0.3s ease; }
.flashkit-bounceIn { animation: flashkitBounceIn 0.5s ease; }

@keyframes flashkitFadeIn {
    from { opacity: 0; transform: scale(0.7); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes flashkitSlideIn {
    from { opacity: 0; transform: translateY(-50px) scale(0.7); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}

@keyframes flashkitBounceIn {
    0% { opacity: 0; transform: scale(0.3); }
    40% { opacity: 1; transform: scale(1.05); }
    60% { transform: scale(0.95); }
    100% { transform: scale(1); }
}

@media (max-width: 480px) {
    .flashkit-toast {
        left: 10px !important;
        right: 10px !important;
        max-width: none;
        min-width: auto;
    }
    .flashkit-popup {
        margin: 20px;
        width: calc(100% - 40px);
    }
}
"#;

/// Client behavior script: a per-element state machine driven by data
/// attributes.
///
/// Lifecycle per element: hidden → appearing (10 ms tick) → visible →
/// dismissing (300 ms transition) → removed. Toasts auto-dismiss after
/// `data-duration` milliseconds (fallback 5000) or on manual close; popups
/// wait for confirm. Dismissal is idempotent: the close paths bail out when
/// the element is already gone.
pub const BEHAVIOR_SCRIPT: &str = r#"
(function () {
    if (window.flashkit) {
        window.flashkit.scan();
        return;
    }

    var FALLBACK_DURATION = 5000;
    var REMOVE_DELAY = 300;

    window.flashkit = {
        scan: function () {
            document.querySelectorAll('.flashkit-toast').forEach(function (toast) {
                if (toast.dataset.flashkitBound) { return; }
                toast.dataset.flashkitBound = '1';
                window.flashkit.showToast(toast);
            });
            document.querySelectorAll('.flashkit-overlay').forEach(function (overlay) {
                if (overlay.dataset.flashkitBound) { return; }
                overlay.dataset.flashkitBound = '1';
                window.flashkit.showPopup(overlay);
            });
        },

        showToast: function (toast) {
            toast.style.display = 'block';
            setTimeout(function () { toast.classList.add('flashkit-show'); }, 10);

            var duration = parseInt(toast.getAttribute('data-duration'), 10);
            if (isNaN(duration)) { duration = FALLBACK_DURATION; }
            setTimeout(function () { window.flashkit.closeToast(toast.id); }, duration);
        },

        closeToast: function (id) {
            var toast = document.getElementById(id);
            if (!toast) { return; }
            toast.classList.remove('flashkit-show');
            setTimeout(function () { toast.remove(); }, REMOVE_DELAY);
        },

        showPopup: function (overlay) {
            overlay.style.display = 'flex';
            setTimeout(function () {
                var panel = overlay.querySelector('.flashkit-popup');
                if (panel) { panel.classList.add('flashkit-show'); }
            }, 10);
        },

        closePopup: function (id) {
            var overlay = document.getElementById(id + '-overlay');
            if (!overlay) { return; }
            var panel = overlay.querySelector('.flashkit-popup');
            if (panel) { panel.classList.remove('flashkit-show'); }
            setTimeout(function () { overlay.remove(); }, REMOVE_DELAY);
        }
    };

    document.addEventListener('click', function (event) {
        var dismiss = event.target.closest('[data-flashkit-dismiss]');
        if (dismiss) {
            window.flashkit.closeToast(dismiss.getAttribute('data-flashkit-dismiss'));
            return;
        }
        var confirm = event.target.closest('[data-flashkit-confirm]');
        if (confirm) {
            window.flashkit.closePopup(confirm.getAttribute('data-flashkit-confirm'));
        }
    });

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', window.flashkit.scan);
    } else {
        window.flashkit.scan();
    }
})();
"#;

/// Returns the stylesheet wrapped in a `<style>` block for page templates.
#[must_use]
pub fn include_css() -> String {
    let mut html = String::with_capacity(STYLESHEET.len() + 20);
    html.push_str("<style>");
    html.push_str(STYLESHEET);
    html.push_str("</style>");
    html
}

/// Returns the behavior script wrapped in a `<script>` block.
///
/// Optional: [`crate::render`] already appends the same script after the
/// message container. Including both is harmless.
#[must_use]
pub fn include_js() -> String {
    let mut html = String::with_capacity(BEHAVIOR_SCRIPT.len() + 20);
    html.push_str("<script>");
    html.push_str(BEHAVIOR_SCRIPT);
    html.push_str("</script>");
    html
}
