//! CSS styles for the UI

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: #f8f9fa;
        color: #2c3e50;
        height: 100%;
        overflow: hidden;
    }

    /* Scrollbar */
    ::-webkit-scrollbar {
        width: 6px;
        height: 6px;
    }
    ::-webkit-scrollbar-track {
        background: transparent;
    }
    ::-webkit-scrollbar-thumb {
        background: rgba(0, 123, 255, 0.3);
        border-radius: 3px;
    }
    ::-webkit-scrollbar-thumb:hover {
        background: rgba(0, 123, 255, 0.5);
    }

    /* Main Container */
    .main-container {
        height: 100vh;
        display: flex;
        flex-direction: column;
        outline: none;
    }

    /* Title Bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 36px;
        background: #2c3e50;
        border-bottom: 1px solid #1a252f;
        user-select: none;
        flex-shrink: 0;
    }
    .title-bar-drag {
        flex: 1;
        height: 100%;
        display: flex;
        align-items: center;
        padding-left: 12px;
        cursor: move;
    }
    .title-text {
        font-size: 14px;
        font-weight: 500;
        color: #f8f9fa;
    }
    .title-bar-buttons {
        display: flex;
        height: 100%;
    }
    .title-btn {
        width: 48px;
        height: 100%;
        border: none;
        background: transparent;
        color: #adb5bd;
        font-size: 12px;
        cursor: pointer;
        transition: all 0.15s;
    }
    .title-btn:hover {
        background: rgba(255, 255, 255, 0.1);
        color: white;
    }
    .title-btn-close:hover {
        background: #dc2626;
        color: white;
    }

    /* Navigation Bar */
    .nav-bar {
        display: flex;
        gap: 4px;
        padding: 8px 20px 0 20px;
        background: #ffffff;
        border-bottom: 1px solid #e9ecef;
        flex-shrink: 0;
    }
    .nav-item {
        padding: 10px 18px;
        font-size: 14px;
        color: #6c757d;
        text-decoration: none;
        border: 1px solid transparent;
        border-bottom: none;
        border-radius: 8px 8px 0 0;
        transition: all 0.3s ease;
    }
    .nav-item:hover {
        color: #007bff;
        background: #f8f9fa;
    }
    .nav-active {
        color: #007bff;
        font-weight: 600;
        background: #f8f9fa;
        border-color: #e9ecef;
    }

    /* Content Area */
    .content-area {
        flex: 1;
        overflow-y: auto;
        padding: 24px 32px;
    }
    .page {
        max-width: 1000px;
        margin: 0 auto;
    }
    .page-title {
        font-size: 22px;
        margin-bottom: 8px;
    }
    .page-intro {
        color: #6c757d;
        margin-bottom: 20px;
    }
    .section-heading {
        font-size: 18px;
        margin: 28px 0 12px 0;
    }

    /* Hero */
    .hero {
        text-align: center;
        padding: 24px 0 8px 0;
    }
    .hero-title {
        font-size: 32px;
        color: #2c3e50;
    }
    .hero-subtitle {
        font-size: 20px;
        font-weight: 400;
        color: #6c757d;
        margin-top: 4px;
    }
    .hero-tagline {
        margin-top: 12px;
        color: #6c757d;
    }

    /* Quick Stats */
    .quick-stats {
        display: flex;
        gap: 16px;
        justify-content: center;
        margin-top: 20px;
    }
    .quick-stat {
        display: flex;
        align-items: center;
        gap: 8px;
        padding: 12px 20px;
        background: #e7f1ff;
        border: 1px solid #b8d4ff;
        border-radius: 8px;
        font-size: 14px;
    }

    /* Feature Boxes */
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 15px;
    }
    .feature-box {
        padding: 1.5rem;
        border-radius: 8px;
        background-color: white;
        border: 1px solid #e9ecef;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
        transition: all 0.3s ease;
    }
    .feature-box:hover {
        transform: translateY(-3px);
        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
    }
    .feature-box h4 {
        margin-bottom: 8px;
    }
    .feature-box ul {
        padding-left: 20px;
        color: #6c757d;
        font-size: 14px;
    }
    .feature-box li {
        margin-top: 4px;
    }

    /* Buttons */
    .btn {
        display: inline-block;
        padding: 0.6rem 1.5rem;
        border: none;
        border-radius: 5px;
        font-size: 14px;
        font-weight: bold;
        text-decoration: none;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .btn-primary {
        background-color: #007bff;
        color: white;
    }
    .btn-primary:hover {
        background-color: #0056b3;
        transform: translateY(-2px);
        box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
    }
    .btn-secondary {
        background-color: white;
        color: #007bff;
        border: 1px solid #007bff;
    }
    .btn-secondary:hover {
        background-color: #e7f1ff;
        transform: translateY(-2px);
    }
    .btn-block {
        display: block;
        width: 100%;
        margin-top: 8px;
    }
    .quick-access {
        display: flex;
        gap: 12px;
    }

    /* Form Cards */
    .form-card {
        max-width: 400px;
        margin: 3rem auto;
        padding: 2rem;
        background: white;
        border: 1px solid #e9ecef;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
    }
    .form-title {
        text-align: center;
        margin-bottom: 4px;
    }
    .form-hint {
        text-align: center;
        color: #6c757d;
        font-size: 14px;
        margin-bottom: 20px;
    }
    .form-field {
        margin-bottom: 14px;
    }
    .form-field label {
        display: block;
        font-size: 13px;
        color: #495057;
        margin-bottom: 4px;
    }
    .form-field input {
        width: 100%;
        padding: 0.5rem 0.75rem;
        border: 1px solid #ced4da;
        border-radius: 5px;
        font-size: 14px;
    }
    .form-field input:focus {
        outline: none;
        border-color: #007bff;
        box-shadow: 0 0 0 2px rgba(0, 123, 255, 0.15);
    }
    .form-footer {
        text-align: center;
        font-size: 13px;
        color: #6c757d;
        margin-top: 16px;
    }
    .form-footer a {
        color: #007bff;
        text-decoration: none;
    }

    /* Metric Cards */
    .metric-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 15px;
        margin-top: 16px;
    }
    .metric-card {
        display: flex;
        flex-direction: column;
        gap: 4px;
        background-color: white;
        padding: 1rem;
        border-radius: 8px;
        border: 1px solid #e9ecef;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
        transition: transform 0.3s ease;
    }
    .metric-card:hover {
        transform: translateY(-2px);
    }
    .metric-label {
        font-size: 13px;
        color: #6c757d;
    }
    .metric-value {
        font-size: 24px;
        font-weight: bold;
        color: #2c3e50;
    }
    .metric-caption {
        font-size: 12px;
        color: #adb5bd;
    }

    /* Contact Cards */
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 15px;
    }
    .contact-card {
        display: flex;
        flex-direction: column;
        gap: 6px;
        padding: 1.5rem;
        background: white;
        border: 1px solid #e9ecef;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
        transition: all 0.3s ease;
    }
    .contact-card:hover {
        transform: translateY(-3px);
        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
    }
    .contact-icon {
        font-size: 22px;
    }
    .contact-label {
        font-weight: 600;
    }
    .contact-detail {
        color: #6c757d;
        font-size: 14px;
    }
"#;
