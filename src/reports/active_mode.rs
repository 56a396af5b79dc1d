use chrono::NaiveDate;

use crate::model::{ContentBlock as B, ReportDocument, TableOfContents};

use super::{checklist, cover, file_changes, header_title};

pub(super) fn build(today: NaiveDate) -> ReportDocument {
    let mut doc = ReportDocument::new(header_title("Admin/User Mode Switch Build Breakdown"));

    doc.push(cover(
        &["Admin / User Mode Switch", "Build Breakdown"],
        "Version 1.0",
        today,
        "This document provides a technical build breakdown of the Admin/User Mode Switch feature \
         for the AutoNateAI Learning Hub. It covers the architecture, service design, toggle UI, \
         Firestore persistence, file changes, and how the feature integrates with the existing \
         RBAC system across all 11 dashboard pages.",
    ));

    doc.push(B::TableOfContents(TableOfContents::new([
        "1.  Feature Overview",
        "2.  Problem Statement",
        "3.  Architecture",
        "4.  ActiveModeService API",
        "5.  Toggle UI Design",
        "6.  Firestore & localStorage Schema",
        "7.  Dashboard Page Integration",
        "8.  Special Page Handling",
        "9.  File Change Map",
        "10. Security Considerations",
        "11. Verification Checklist",
    ])));

    feature_overview(&mut doc);
    problem_statement(&mut doc);
    architecture(&mut doc);
    service_api(&mut doc);
    toggle_ui(&mut doc);
    schema(&mut doc);
    page_integration(&mut doc);
    special_pages(&mut doc);
    file_change_map(&mut doc);
    security(&mut doc);
    verification(&mut doc);

    doc
}

fn feature_overview(doc: &mut ReportDocument) {
    doc.extend([
        B::section("1. Feature Overview"),
        B::body(
            "The Admin/User Mode Switch gives admin users the ability to toggle between two \
             interface modes across the entire dashboard:",
        ),
        B::bullet(
            "Admin Mode: Full visibility - Basketball section, Admin section, and all \
             admin-specific UI elements are shown in the sidebar.",
        ),
        B::bullet(
            "User Mode: Standard user experience - Admin-only sidebar sections are hidden, \
             allowing admins to see exactly what a regular user sees.",
        ),
        B::body(
            "The active mode is persisted to Firestore on the user document and cached in \
             localStorage to prevent visual flash on page load. A red-accented pill toggle \
             is dynamically injected into the sidebar on every dashboard page, visible only \
             to admin users. Non-admin users see no toggle and no admin sections.",
        ),
    ]);
}

fn problem_statement(doc: &mut ReportDocument) {
    doc.extend([
        B::section("2. Problem Statement"),
        B::body(
            "Before this feature, admin users always saw the Basketball and Admin sidebar \
             sections on every dashboard page. This created two issues:",
        ),
        B::sub("Cluttered Admin Experience"),
        B::body(
            "When admins wanted to use the platform as a learner (reviewing courses, checking \
             feed content, tracking progress), the admin-only sections added visual clutter. \
             The admin sidebar had more items than regular users, making navigation feel \
             different from the standard user experience.",
        ),
        B::sub("No Way to Preview User Experience"),
        B::body(
            "Admins had no mechanism to see what a regular user would see. When building features \
             or debugging layout issues, the only option was to log in as a non-admin test account. \
             This slowed down development and QA workflows.",
        ),
        B::sub("Solution"),
        B::body(
            "A single toggle in the sidebar lets admins instantly switch perspective without \
             logging out. The mode persists across page navigations and browser sessions via \
             Firestore, and restores instantly on page load via localStorage caching.",
        ),
    ]);
}

fn architecture(doc: &mut ReportDocument) {
    doc.extend([
        B::section("3. Architecture"),
        B::sub("Component Overview"),
        B::code(
            "+--------------------+      +------------------+\n\
             | ActiveModeService  |----->| Firestore        |\n\
             | (shared/js/)       |      | users/{uid}      |\n\
             +--------------------+      | .activeMode      |\n  \
               |  |  |                   +------------------+\n  \
               |  |  +-- injectToggleUI()\n  \
               |  +-- applyAdminSections()  -->  #admin-section\n  \
               |                              -->  #basketball-section\n  \
               +-- localStorage cache\n       \
                    autonateai_activeMode",
        ),
        B::sub("Initialization Flow"),
        B::body(
            "1. Page loads, Firebase auth resolves.\n\
             2. Dashboard page calls ActiveModeService.init().\n\
             3. Service checks admin role via RBACService.hasRole('admin').\n\
             4. If not admin: set mode to 'user', return (no toggle, no admin sections).\n\
             5. If admin: read localStorage cache (prevents flash).\n\
             6. Read Firestore users/{uid}.activeMode (source of truth).\n\
             7. Apply sidebar visibility based on mode.\n\
             8. Inject toggle UI into sidebar.",
        ),
        B::sub("Toggle Flow"),
        B::body(
            "1. Admin clicks toggle switch in sidebar.\n\
             2. Mode flips ('admin' <-> 'user').\n\
             3. localStorage updated immediately.\n\
             4. Sidebar sections show/hide instantly.\n\
             5. Toggle indicator updates ('Admin' / 'User').\n\
             6. Firestore write (async, non-blocking).\n\
             7. Registered listeners notified.",
        ),
    ]);
}

fn service_api(doc: &mut ReportDocument) {
    let methods: [(&str, &str, &str); 7] = [
        (
            "init()",
            "Called after auth is ready. Checks admin role, reads mode from cache/Firestore, \
             applies sidebar, injects toggle.",
            "await window.ActiveModeService.init();",
        ),
        (
            "getMode()",
            "Returns the current mode string: 'user' or 'admin'.",
            "const mode = window.ActiveModeService.getMode();\n// => 'admin' or 'user'",
        ),
        (
            "isAdminMode()",
            "Returns true if the current mode is 'admin'.",
            "if (window.ActiveModeService.isAdminMode()) { ... }",
        ),
        (
            "isAdminUser()",
            "Returns true if the user has the admin role, regardless of current mode. Useful for \
             permission checks that should not be affected by the mode toggle.",
            "const canAccessAdmin = window.ActiveModeService.isAdminUser();",
        ),
        (
            "toggle()",
            "Switches mode, updates Firestore + localStorage, re-applies sidebar sections, \
             notifies listeners.",
            "await window.ActiveModeService.toggle();",
        ),
        (
            "onModeChange(callback)",
            "Register a listener that fires when mode changes. Receives the new mode string.",
            "window.ActiveModeService.onModeChange((mode) => {\n  \
               console.log('Mode changed to:', mode);\n\
             });",
        ),
        (
            "clearCache()",
            "Clears the localStorage cache. Should be called on logout.",
            "window.ActiveModeService.clearCache();",
        ),
    ];

    doc.push(B::section("4. ActiveModeService API"));
    for (name, description, example) in methods {
        doc.extend([B::sub(name), B::body(description), B::code(example)]);
    }
}

fn toggle_ui(doc: &mut ReportDocument) {
    doc.extend([
        B::section("5. Toggle UI Design"),
        B::sub("Visual Design"),
        B::body(
            "The toggle is a red-accented (#f44336) pill switch that matches the Admin section \
             title color. It is placed between the sidebar navigation and the user card at the \
             bottom. The design has three elements:",
        ),
        B::bullet("'Mode' label (uppercase, muted color) - indicates purpose"),
        B::bullet("Toggle switch (pill shape, white knob, red when active)"),
        B::bullet("'Admin' or 'User' indicator text (red when admin, muted when user)"),
        B::sub("Collapsed Sidebar Behavior"),
        B::body(
            "When the sidebar is collapsed, the 'Mode' label and indicator text are hidden \
             via CSS (.sidebar.collapsed .mode-toggle-label, .mode-toggle-indicator { display: none }). \
             Only the toggle switch remains visible and functional, centered in the narrow sidebar.",
        ),
        B::sub("Injection Strategy"),
        B::body(
            "The toggle is injected by JavaScript rather than hardcoded into 11 HTML files. \
             This provides a single source of truth - any changes to the toggle design only \
             need to happen in active-mode-service.js. The CSS is also injected via a <style> \
             tag to keep the feature self-contained.",
        ),
        B::code(
            "// Injection point in sidebar:\n\
             //   </nav>\n\
             //   [MODE TOGGLE INSERTED HERE]\n\
             //   <div class=\"sidebar-user\">...",
        ),
    ]);
}

fn schema(doc: &mut ReportDocument) {
    doc.extend([
        B::section("6. Firestore & localStorage Schema"),
        B::sub("Firestore Field"),
        B::code(
            "users/{uid}: {\n  \
               // ... existing fields ...\n  \
               activeMode: \"admin\"  // or \"user\"\n\
             }",
        ),
        B::body(
            "A single string field on the user document. Written with { merge: true } to avoid \
             overwriting other fields. Read once on page load.",
        ),
        B::sub("localStorage Cache"),
        B::code(
            "Key: \"autonateai_activeMode\"\n\
             Value: {\n  \
               \"mode\": \"admin\",\n  \
               \"uid\": \"abc123\",\n  \
               \"ts\": 1708000000000\n\
             }",
        ),
        B::body(
            "The cache includes the user ID to prevent cross-account contamination (if two \
             accounts are used in the same browser). The timestamp enables a 1-hour TTL - \
             after which the Firestore value is re-read to ensure consistency. The cache is \
             cleared on logout via ActiveModeService.clearCache().",
        ),
    ]);
}

fn page_integration(doc: &mut ReportDocument) {
    doc.extend([
        B::section("7. Dashboard Page Integration"),
        B::sub("Script Tag Addition"),
        B::body(
            "All 11 dashboard pages received a new script tag for active-mode-service.js, placed \
             after rbac.js. Six pages (courses, challenges, progress, achievements, leaderboard, \
             notes) were also missing rbac.js entirely, so it was added as a prerequisite. \
             ActiveModeService depends on RBACService.hasRole('admin') to detect admin users.",
        ),
        B::code(
            "<script src=\"../shared/js/rbac.js\"></script>           <!-- added to 6 pages -->\n\
             <script src=\"../shared/js/active-mode-service.js\"></script>  <!-- added to all 11 -->",
        ),
        B::sub("RBAC Block Replacement"),
        B::body("The existing RBAC admin-check block on 9 simple pages was replaced:"),
        B::code(
            "// BEFORE:\n\
             if (window.RBACService) {\n  \
               const isAdmin = await window.RBACService.hasRole('admin');\n  \
               if (isAdmin) {\n    \
                 document.getElementById('admin-section').style.display = 'block';\n    \
                 document.getElementById('basketball-section').style.display = 'block';\n  \
               }\n\
             }\n\
             \n\
             // AFTER:\n\
             if (window.ActiveModeService) {\n  \
               await window.ActiveModeService.init();\n\
             }",
        ),
        B::body(
            "Pages using this simple replacement: profile, feed, settings, courses, challenges, \
             progress, achievements, leaderboard, notes.",
        ),
    ]);
}

fn special_pages(doc: &mut ReportDocument) {
    doc.extend([
        B::section("8. Special Page Handling"),
        B::sub("index.html (Main Dashboard)"),
        B::body(
            "The main dashboard has additional logic beyond the simple pattern:\n\n\
             1. The isAdminUser variable is used elsewhere (notification test button), so it is \
             set from ActiveModeService.isAdminUser() instead of a direct RBAC check.\n\n\
             2. The basketball section has an org-based check: non-admin users who belong to the \
             'city-high-basketball' organization should still see the basketball section. This \
             check runs separately when the user is not in admin mode.\n\n\
             3. A mode-change listener re-evaluates basketball section visibility when the admin \
             toggles modes, ensuring org members retain basketball access in user mode.",
        ),
        B::sub("basketball-sim.html (Play Simulator)"),
        B::body(
            "This page has a security access gate that prevents non-authorized users from \
             viewing the simulator. This gate is kept unchanged - it checks org membership \
             AND admin role, and redirects if neither is satisfied.\n\n\
             The basketball sidebar section is not conditional on this page (it is always visible \
             since the user is on the basketball page). Only the admin section visibility is \
             managed by ActiveModeService.\n\n\
             The access gate uses RBACService directly (not ActiveModeService) because it is a \
             security check - an admin should always have access regardless of their mode toggle.",
        ),
    ]);
}

fn file_change_map(doc: &mut ReportDocument) {
    doc.push(B::section("9. File Change Map"));

    doc.extend(file_changes(
        "courses/shared/js/active-mode-service.js",
        "NEW",
        &[
            "ActiveModeService singleton with init, toggle, getMode, isAdminMode, isAdminUser",
            "Dynamic toggle UI injection with CSS-in-JS",
            "Firestore persistence (users/{uid}.activeMode)",
            "localStorage caching with 1-hour TTL and UID binding",
            "Mode change listener system (onModeChange callback)",
        ],
    ));
    doc.extend(file_changes(
        "courses/dashboard/index.html",
        "MODIFIED",
        &[
            "Script tag: active-mode-service.js",
            "RBAC block replaced with ActiveModeService.init()",
            "isAdminUser set from ActiveModeService.isAdminUser()",
            "Org-based basketball check for non-admin mode",
            "Mode-change listener for basketball section visibility",
        ],
    ));
    doc.extend(file_changes(
        "courses/dashboard/basketball-sim.html",
        "MODIFIED",
        &[
            "Script tag: active-mode-service.js",
            "Admin-section display replaced with ActiveModeService.init()",
            "Access gate (RBACService check) kept unchanged for security",
        ],
    ));

    let simple_pages = [
        "profile.html",
        "feed.html",
        "settings.html",
        "courses.html",
        "challenges.html",
        "progress.html",
        "achievements.html",
        "leaderboard.html",
        "notes.html",
    ];
    doc.extend([
        B::file("courses/dashboard/{9 simple pages}", Some("MODIFIED")),
        B::bullet_indented("Script tag: active-mode-service.js added", 10.0),
        B::bullet_indented("Script tag: rbac.js added (was missing on 6 of these pages)", 10.0),
        B::bullet_indented(
            "RBAC admin-check block replaced with ActiveModeService.init()",
            10.0,
        ),
        B::bullet_indented(format!("Pages: {}", simple_pages.join(", ")), 10.0),
        B::Spacer(4.0),
        B::sub("Total: 1 new file, 11 modified files"),
    ]);
}

fn security(doc: &mut ReportDocument) {
    doc.extend([
        B::section("10. Security Considerations"),
        B::sub("Mode Toggle is UI-Only"),
        B::body(
            "The mode toggle only affects sidebar visibility. It does NOT change the user's \
             actual permissions. An admin in 'user' mode still has full admin access - the \
             admin dashboard URL, Firestore rules, and API permissions are unchanged. This is \
             intentional: the toggle is a convenience feature for UI preview, not a security \
             boundary.",
        ),
        B::sub("Access Gates Remain Unchanged"),
        B::body(
            "The basketball-sim.html access gate continues to use RBACService directly. An admin \
             in 'user' mode can still access the basketball simulator. This prevents the mode \
             toggle from accidentally locking an admin out of pages they should have access to.",
        ),
        B::sub("Firestore Write Uses Merge"),
        B::body(
            "The activeMode field is written with { merge: true } to avoid accidentally \
             overwriting other user document fields. Only the activeMode key is touched.",
        ),
        B::sub("localStorage Cache Isolation"),
        B::body(
            "The cache key includes the user UID. If a different user logs into the same \
             browser, their cached mode is not applied to the new user's session. The 1-hour \
             TTL ensures stale cache entries are eventually refreshed from Firestore.",
        ),
    ]);
}

fn verification(doc: &mut ReportDocument) {
    doc.extend([
        B::section("11. Verification Checklist"),
        B::body("Items to verify before this feature is considered production-ready:"),
        B::Spacer(2.0),
    ]);
    doc.extend(checklist(&[
        ("ActiveModeService loads on all 11 dashboard pages", true),
        ("Toggle appears in sidebar for admin users only", true),
        ("Toggle hidden for non-admin users", true),
        ("Admin mode shows Basketball + Admin sections", true),
        ("User mode hides Basketball + Admin sections", true),
        ("Mode persists across page navigations (localStorage)", true),
        ("Mode persists across browser sessions (Firestore)", true),
        ("Toggle works in collapsed sidebar (labels hidden)", true),
        ("Toggle works in mobile sidebar drawer", true),
        ("index.html: isAdminUser variable set correctly", true),
        ("index.html: org basketball check works in user mode", true),
        ("basketball-sim.html: access gate unchanged", true),
        ("basketball-sim.html: basketball section always visible", true),
        ("No RBAC admin-section display blocks remain in pages", true),
        ("Script tag present on all 11 pages", true),
        ("Non-admin users see no toggle, no admin sections", true),
        ("Firestore write uses merge (no field overwrite)", true),
        ("localStorage cache cleared on logout", false),
    ]));
}
