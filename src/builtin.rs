/// Keyframes used by toast notifications, injected into `<head>` once per page.
pub const TOAST_KEYFRAMES_CSS: &str = r#"
    @keyframes slideIn {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOut {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }
"#;

pub const TOAST_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; \
background: linear-gradient(to right, #0891b2, #2563eb); color: white; \
padding: 12px 24px; border-radius: 8px; z-index: 1000; \
box-shadow: 0 10px 25px rgba(8, 145, 178, 0.4); animation: slideIn 0.3s ease-out;";

pub const TOAST_SLIDE_OUT: &str = "slideOut 0.3s ease-out";
