use chrono::NaiveDate;

use crate::model::{ContentBlock as B, ReportDocument, Status, TableOfContents};

use super::{checklist, cover, file_changes, header_title};

pub(super) fn build(today: NaiveDate) -> ReportDocument {
    let mut doc = ReportDocument::new(header_title("Feed & Post Management Feature Breakdown"));

    doc.push(cover(
        &["Feed & Post Management", "Feature Breakdown"],
        "Version 2.0",
        today,
        "This document provides a comprehensive technical and product breakdown of the Feed & Post \
         Management features being built for the AutoNateAI Learning Hub. It covers the architecture, \
         user experience decisions, file-level changes, and the rationale for how each piece is \
         tailored specifically for a coding education platform rather than a generic social feed.",
    ));

    doc.push(B::TableOfContents(TableOfContents::new([
        "1.  Executive Summary",
        "2.  Why a Social Feed for AutoNateAI?",
        "3.  Feature Overview & Status",
        "4.  Post Card 3-Dot Menu - Architecture",
        "5.  Feed & Post Settings - Architecture",
        "6.  Profile Picture Upload - Architecture",
        "7.  Profile Page Updates",
        "8.  Navbar Consistency Fixes",
        "9.  File Change Map",
        "10. Data Model & Firestore Schema",
        "11. UI/UX Design Decisions",
        "12. Security Considerations",
        "13. Rollout Checklist",
    ])));

    executive_summary(&mut doc);
    why_a_feed(&mut doc);
    feature_status(&mut doc);
    post_menu(&mut doc);
    feed_settings(&mut doc);
    profile_picture(&mut doc);
    profile_page(&mut doc);
    navbar_fixes(&mut doc);
    file_change_map(&mut doc);
    data_model(&mut doc);
    design_decisions(&mut doc);
    security(&mut doc);
    rollout(&mut doc);

    doc
}

fn executive_summary(doc: &mut ReportDocument) {
    doc.extend([
        B::section("1. Executive Summary"),
        B::body(
            "The Feed & Post Management update introduces two major capabilities to the AutoNateAI \
             Learning Hub social feed:",
        ),
        B::bullet(
            "Post Actions Menu: A traditional 3-dot dropdown on every post card giving users \
             contextual actions - Edit and Delete for their own posts, plus Copy Link, Report, \
             and Mute Author for community moderation.",
        ),
        B::bullet(
            "Feed & Post Settings: A new section in the Settings page allowing users to configure \
             their feed experience - display preferences, post defaults, and feed privacy controls.",
        ),
        B::body(
            "Both features follow the platform's existing glass-card morphism design language and are \
             built with the same Firebase + vanilla JS service architecture used across the dashboard. \
             Settings auto-save to Firestore with debounced writes, and the post menu uses event \
             delegation for reliable behavior across dynamically rendered content.",
        ),
    ]);
}

fn why_a_feed(doc: &mut ReportDocument) {
    doc.extend([
        B::section("2. Why a Social Feed for AutoNateAI?"),
        B::body(
            "AutoNateAI is not a generic social platform - it is a coding education hub. The feed \
             and post management features are purpose-built to serve learners, not casual social users. \
             Here is why each piece matters for this specific context:",
        ),
        B::sub("Learning Through Sharing"),
        B::body(
            "When students share code snippets, project showcases, and milestone achievements on the \
             feed, they reinforce their own learning through articulation. The ability to edit posts \
             lets them refine their explanations - a core learning behavior. Unlike Twitter or \
             Instagram where posts are throwaway, learning content benefits from iteration.",
        ),
        B::sub("Safe Learning Environment"),
        B::body(
            "The Report and Mute features are critical for maintaining a safe educational space. \
             Coding communities can attract spam, off-topic content, or discouraging comments. \
             Giving learners control over what they see keeps the feed focused on growth. The \
             Mute Author feature is especially important - it lets a student quietly filter out \
             content that is not relevant to their learning journey without confrontation.",
        ),
        B::sub("Ownership and Accountability"),
        B::body(
            "Delete Post gives students agency over their content. A beginner might post code they \
             later realize has issues - the ability to remove it reduces anxiety around sharing early \
             work. This lowers the barrier to participation, which is essential for a learning \
             community where many users are posting code for the first time.",
        ),
        B::sub("Personalized Feed Experience"),
        B::body(
            "The Feed Settings in the Settings page let users tailor the feed to their learning style. \
             Some learners prefer seeing trending community content for inspiration; others want to \
             follow specific peers working on similar courses. The Show Code Snippets toggle is \
             AutoNateAI-specific - it lets users who are on mobile or prefer prose-only content \
             collapse inline code blocks for a cleaner reading experience.",
        ),
        B::sub("Privacy for Learners"),
        B::body(
            "Many AutoNateAI users are career changers or beginners who may not want their learning \
             activity publicly visible. The Feed Privacy settings (Public Profile, Show in Leaderboard, \
             Allow Mentions) give users control over their visibility. This is especially important \
             for users from partner organizations like Endless Opportunities Foundation, where \
             participants may prefer to learn privately.",
        ),
    ]);
}

fn feature_status(doc: &mut ReportDocument) {
    use Status::{Complete, Planned};

    let groups: [(&str, &[(&str, Status)]); 6] = [
        (
            "Post Card 3-Dot Dropdown Menu",
            &[
                ("HTML Template & Conditional Rendering", Complete),
                ("CSS Styling (Dark + Light Theme)", Complete),
                ("Event Delegation Click Handling", Complete),
                ("Edit Post Modal (create, populate, save)", Complete),
                ("Delete Post (confirm, remove, Firestore sync)", Complete),
                ("Copy Link to Clipboard", Complete),
                ("Report Post (toast feedback)", Complete),
                ("Mute Author (toast feedback)", Complete),
                ("Firestore-backed mute/report persistence", Planned),
            ],
        ),
        (
            "Feed & Post Settings (Settings Page)",
            &[
                ("Feed Preferences UI (3 controls)", Complete),
                ("Post Defaults UI (3 controls)", Complete),
                ("Feed Privacy UI (3 controls)", Complete),
                ("Load settings from Firestore", Complete),
                ("Auto-save with debounce to Firestore", Complete),
                ("Feed page reads settings on load", Planned),
            ],
        ),
        (
            "Profile Picture Upload (Settings Page)",
            &[
                ("Avatar preview with instant local display", Complete),
                ("Firebase Storage upload with progress bar", Complete),
                ("Parallel Auth + Firestore photoURL update", Complete),
                ("Remove avatar functionality", Complete),
            ],
        ),
        (
            "Profile Page Updates",
            &[
                ("Edit Profile links to Settings page", Complete),
                ("Bio/status always visible with auto-save", Complete),
            ],
        ),
        (
            "Feed Page Mobile Sidebar",
            &[
                ("Mobile sidebar toggle matches dashboard standard", Complete),
                ("localStorage sidebar collapse persistence", Complete),
            ],
        ),
        (
            "Navbar Consistency",
            &[
                ("Notes link added to challenges.html sidebar", Complete),
                ("Feed + Settings links on all dashboard pages", Complete),
                ("Navbar audit PDF published", Complete),
            ],
        ),
    ];

    doc.push(B::section("3. Feature Overview & Status"));
    for (i, (title, badges)) in groups.iter().enumerate() {
        if i > 0 {
            doc.push(B::Spacer(4.0));
        }
        doc.push(B::sub(*title));
        doc.extend(
            badges
                .iter()
                .map(|(label, status)| B::badge(*label, *status)),
        );
    }
}

fn post_menu(doc: &mut ReportDocument) {
    doc.extend([
        B::section("4. Post Card 3-Dot Menu - Architecture"),
        B::sub("Template Structure"),
        B::body(
            "The dropdown menu is rendered inside each post card as part of the renderPostCard() \
             template literal in feed.html. It uses conditional rendering based on post ownership:",
        ),
        B::code(
            "<div class=\"post-card__menu-wrapper\">\n  \
               <button class=\"post-card__menu-btn\">...</button>\n  \
               <div class=\"post-card__dropdown\" id=\"dropdown-{postId}\">\n    \
                 // Owner-only: Edit Post, Delete Post, divider\n    \
                 // All users: Copy Link, Report Post\n    \
                 // Non-owner only: Mute Author\n  \
               </div>\n\
             </div>",
        ),
        B::body(
            "The conditional logic compares post.authorId against this.currentUser?.uid. When the \
             logged-in user owns the post, they see Edit and Delete at the top with a divider. \
             Copy Link and Report always appear. Mute Author only shows on other users' posts since \
             muting yourself is not meaningful.",
        ),
        B::sub("CSS Visibility Strategy"),
        B::body(
            "The dropdown uses display:none by default and display:block when the .show class is \
             added. This was chosen over an opacity-based approach because opacity:0 with \
             pointer-events:none was found to still render child elements visually in some \
             configurations. The display:none approach completely removes elements from the render tree.",
        ),
        B::code(
            ".post-card__dropdown {\n  \
               display: none;            /* Hidden by default */\n  \
               position: absolute;       /* Relative to wrapper */\n  \
               top: 100%; right: 0;\n  \
               min-width: 180px;\n  \
               z-index: 100;\n\
             }\n\
             .post-card__dropdown.show {\n  \
               display: block;           /* Visible when toggled */\n\
             }",
        ),
        B::sub("Event Delegation Pattern"),
        B::body(
            "Rather than binding click handlers to each individual menu button and dropdown item \
             (which breaks when posts are dynamically re-rendered), the implementation uses \
             event delegation on the feed container (#feed-posts). A single click listener uses \
             .closest() to determine which element was clicked:",
        ),
        B::code(
            "feedContainer.addEventListener(\"click\", (e) => {\n  \
               const menuBtn = e.target.closest(\".post-card__menu-btn\");\n  \
               if (menuBtn) { /* toggle dropdown */ return; }\n\
             \n  \
               const item = e.target.closest(\".post-card__dropdown-item\");\n  \
               if (item) { /* dispatch action */ return; }\n\
             });",
        ),
        B::body(
            "This pattern is essential because FeedPage.renderPosts() re-renders the entire post list, \
             destroying and recreating DOM elements. Event delegation survives re-renders automatically.",
        ),
        B::sub("Edit Post Flow"),
        B::body(
            "1. User clicks Edit Post in the dropdown.\n\
             2. handleMenuAction dispatches to openEditPost(postId).\n\
             3. A modal overlay is created (or reused if already exists) with a textarea.\n\
             4. The textarea is populated with the post's current body text.\n\
             5. On save: local posts array updated optimistically, FeedService.updatePost() \
             writes to Firestore, renderPosts() refreshes the UI.\n\
             6. The save button is cloned before rebinding to prevent duplicate listeners.",
        ),
        B::sub("Delete Post Flow"),
        B::body(
            "1. User clicks Delete Post in the dropdown.\n\
             2. A native confirm() dialog asks for confirmation.\n\
             3. On confirm: post removed from local array, renderPosts() refreshes UI, \
             FeedService.deletePost() removes it from Firestore asynchronously.\n\
             4. A toast notification confirms the deletion.",
        ),
    ]);
}

fn feed_settings(doc: &mut ReportDocument) {
    doc.extend([
        B::section("5. Feed & Post Settings - Architecture"),
        B::sub("Settings Page Layout"),
        B::body(
            "The Feed & Posts section is added to settings.html as the fourth section, after Account \
             Settings, Notification Preferences, and Appearance. It uses the same glass-card design \
             pattern and is split into three cards within a two-column grid:",
        ),
        B::bullet(
            "Feed Preferences (left): Show Code Snippets, Auto-play Milestones, Default Feed View",
        ),
        B::bullet("Post Defaults (right): Default Post Type, Allow Comments, Show Activity Status"),
        B::bullet("Feed Privacy (full width): Public Profile, Show in Leaderboard, Allow Mentions"),
        B::sub("Settings Controls"),
        B::body("The following 9 controls are available:"),
    ]);

    let controls = [
        ("feed-show-code", "Toggle", "Show/hide inline code blocks in feed posts", "true"),
        ("feed-autoplay-milestones", "Toggle", "Auto-play milestone achievement animations", "true"),
        ("feed-default-view", "Select", "Default tab: Trending / Latest / Following", "trending"),
        ("post-default-type", "Select", "Pre-selected post type when composing", "status"),
        ("post-allow-comments", "Toggle", "Allow comments on your posts by default", "true"),
        ("post-show-activity", "Toggle", "Show online/active status to other users", "true"),
        ("privacy-public-profile", "Toggle", "Allow anyone to view your profile and posts", "true"),
        ("privacy-show-leaderboard", "Toggle", "Include your stats on the leaderboard", "true"),
        ("privacy-allow-mentions", "Toggle", "Let others tag you with @mention", "true"),
    ];
    doc.extend(controls.iter().map(|(id, kind, description, default)| {
        B::definition(
            format!("#{}  ({}, default: {})", id, kind, default),
            *description,
        )
    }));

    doc.extend([
        B::sub("Load / Save Architecture"),
        B::body(
            "Settings are loaded from and saved to the Firestore user document under a settings map. \
             The SettingsPage controller has two methods:",
        ),
        B::code(
            "loadFeedSettings()\n  \
               - Reads users/{uid} document from Firestore\n  \
               - Extracts doc.data().settings.* fields\n  \
               - Populates each toggle/select with stored value or default\n\
             \n\
             setupFeedSettingsSave()\n  \
               - Attaches 'change' listener to all 9 controls\n  \
               - Debounces writes by 500ms\n  \
               - Writes all 9 values as dot-notation keys\n  \
               - Shows a toast notification on save",
        ),
    ]);
}

fn profile_picture(doc: &mut ReportDocument) {
    doc.extend([
        B::section("6. Profile Picture Upload - Architecture"),
        B::sub("Optimistic UI Preview"),
        B::body(
            "When a user selects an image file, the avatar preview updates instantly using \
             URL.createObjectURL(file) before the upload even begins. This eliminates the perception \
             of a slow upload - the user sees their new photo immediately while the actual Firebase \
             Storage upload happens in the background with a progress bar.",
        ),
        B::sub("Upload Flow"),
        B::body(
            "1. User clicks Upload Photo, file picker opens (accepts JPG, PNG, WebP, max 2MB).\n\
             2. Local preview rendered instantly via URL.createObjectURL().\n\
             3. File uploaded to Firebase Storage at avatars/{uid}/profile.{ext}.\n\
             4. Progress bar shows real-time upload percentage.\n\
             5. On completion, download URL retrieved from Storage.\n\
             6. Firebase Auth profile and Firestore user doc updated in parallel via Promise.all().\n\
             7. All sidebar avatars across pages reflect the new photo on next load.",
        ),
        B::sub("Storage Path"),
        B::code(
            "Firebase Storage: avatars/{uid}/profile.{ext}\n\
             Firebase Auth:    user.updateProfile({ photoURL: downloadURL })\n\
             Firestore:        users/{uid} -> { photoURL: downloadURL }",
        ),
    ]);
}

fn profile_page(doc: &mut ReportDocument) {
    doc.extend([
        B::section("7. Profile Page Updates"),
        B::sub("Edit Profile -> Settings Shortcut"),
        B::body(
            "The Edit Profile button in the profile header was changed from a toggle button \
             (that opened a bio textarea) to a direct link to settings.html. This provides \
             a clean shortcut for users who want to update their profile picture, display name, \
             or other account settings without hunting for the Settings page.",
        ),
        B::sub("Always-Visible Bio/Status"),
        B::body(
            "The bio textarea is now always visible on the profile page instead of being hidden \
             behind the Edit Profile toggle. Users can type their status/bio at any time and it \
             auto-saves to Firestore after 800ms of inactivity (debounced). This removes friction \
             and makes the profile feel more like a living document. The old <p> display element \
             was removed in favor of the single editable textarea.",
        ),
        B::code(
            "// Auto-save with debounce\n\
             bioEdit.addEventListener('input', () => {\n  \
               clearTimeout(saveTimeout);\n  \
               saveTimeout = setTimeout(() => {\n    \
                 this.saveBio(bioEdit.value.trim());\n  \
               }, 800);\n\
             });",
        ),
    ]);
}

fn navbar_fixes(doc: &mut ReportDocument) {
    doc.extend([
        B::section("8. Navbar Consistency Fixes"),
        B::sub("Challenges Page - Missing Notes Link"),
        B::body(
            "The challenges.html page was missing the Notes nav item in the Learning section of \
             its sidebar. All other dashboard pages had Dashboard > Courses > Challenges under Main, \
             then Progress > Achievements > Notes under Learning. Challenges only had Progress and \
             Achievements. The Notes link was added to match the gold standard (index.html).",
        ),
        B::sub("Feed Page Mobile Sidebar"),
        B::body(
            "The feed page sidebar toggle was using a non-standard CSS class 'mobile-open' with \
             an 'active' overlay toggle, while all other dashboard pages use the 'open' class. \
             The dashboard.css stylesheet only has styles for .sidebar.open, so the feed sidebar \
             did not respond to the mobile toggle. Fixed by switching to the standard 'open' class \
             and adding localStorage persistence for the collapsed state.",
        ),
        B::sub("Navbar Audit PDF"),
        B::body(
            "A comprehensive Navbar Consistency Audit PDF was generated and pushed to main, \
             documenting all sidebar inconsistencies across the 11 dashboard pages. The audit \
             covers a full matrix of which pages have which nav items, detailed issue descriptions \
             with severity ratings, and a recommended fix plan.",
        ),
    ]);
}

fn file_change_map(doc: &mut ReportDocument) {
    doc.extend([
        B::section("9. File Change Map"),
        B::body("The following files were modified to implement this feature set:"),
    ]);

    doc.extend(file_changes(
        "courses/dashboard/feed.html",
        "NEW",
        &[
            "Full feed page with post composer, reactions, comments, bookmarks",
            "Post card template with .post-card__menu-wrapper and conditional dropdown",
            "Event delegation for all post interactions via #feed-posts container",
            "handleMenuAction() dispatcher for edit/delete/copy-link/report/mute",
            "openEditPost() with modal creation, textarea, optimistic save",
            "confirmDeletePost() with confirm dialog, local removal, Firestore delete",
            "Mobile sidebar fix: changed from 'mobile-open' to standard 'open' class",
        ],
    ));
    doc.extend(file_changes(
        "courses/shared/css/feed.css",
        "NEW",
        &[
            "Complete feed page styling with dark theme glass-card design",
            ".post-card__menu-wrapper, .post-card__dropdown (display:none/block)",
            ".post-card__dropdown-item with hover states and --danger variant",
            ".post-edit-overlay and .post-edit-modal styles",
            "[data-theme='light'] variants for all feed components",
        ],
    ));
    doc.extend(file_changes(
        "courses/dashboard/settings.html",
        "MODIFIED",
        &[
            "Added Feed & Posts section with 3 glass-cards (9 controls)",
            "Added loadFeedSettings() and setupFeedSettingsSave() to controller",
            "Added Firebase Storage SDK for avatar uploads",
            "Added profile picture upload with optimistic preview and progress bar",
            "Added loadProfilePicture() and setupProfilePictureUpload() methods",
        ],
    ));
    doc.extend(file_changes(
        "courses/dashboard/profile.html",
        "MODIFIED",
        &[
            "Edit Profile button changed from toggle to link to settings.html",
            "Bio textarea always visible with 800ms debounced auto-save",
            "Removed old toggle-based edit mode and <p> bio display element",
        ],
    ));
    doc.extend(file_changes(
        "courses/dashboard/challenges.html",
        "MODIFIED",
        &["Added missing Notes link to Learning section in sidebar"],
    ));

    doc.push(B::sub("New Service Layer Files"));
    let services = [
        ("courses/shared/js/feed-service.js", "Feed CRUD, queries, pagination"),
        ("courses/shared/js/follow-service.js", "Follow/unfollow, follower counts"),
        ("courses/shared/js/reaction-service.js", "Post reactions (like, celebrate, etc.)"),
        ("courses/shared/js/comment-service.js", "Comment CRUD on posts"),
        ("courses/shared/js/bookmark-service.js", "Bookmark/unbookmark posts"),
        ("courses/shared/js/story-service.js", "Stories/ephemeral content"),
    ];
    doc.extend(
        services
            .iter()
            .map(|(path, description)| B::definition(*path, *description)),
    );

    let sidebar_pages = [
        "index.html",
        "courses.html",
        "challenges.html",
        "progress.html",
        "achievements.html",
        "notes.html",
        "leaderboard.html",
    ];
    doc.extend([
        B::Spacer(2.0),
        B::file("courses/dashboard/{8 sidebar pages}", None),
        B::bullet_indented(
            format!(
                "Added Feed + Settings sidebar links to: {}",
                sidebar_pages.join(", ")
            ),
            10.0,
        ),
    ]);
}

fn data_model(doc: &mut ReportDocument) {
    doc.extend([
        B::section("10. Data Model & Firestore Schema"),
        B::sub("User Settings (users/{uid})"),
        B::body(
            "All feed and post settings are stored as flat keys under the settings map in the user \
             document. This avoids subcollection overhead and allows atomic updates with \
             dot-notation field paths.",
        ),
        B::code(
            "users/{uid}: {\n  \
               displayName: \"...\",\n  \
               email: \"...\",\n  \
               settings: {\n    \
                 // Existing\n    \
                 theme: \"dark\",\n    \
                 fontSize: \"medium\",\n    \
                 accentColor: \"#7986cb\",\n\
             \n    \
                 // NEW - Feed Preferences\n    \
                 feedShowCode: true,\n    \
                 feedAutoplayMilestones: true,\n    \
                 feedDefaultView: \"trending\",\n\
             \n    \
                 // NEW - Post Defaults\n    \
                 postDefaultType: \"status\",\n    \
                 postAllowComments: true,\n    \
                 postShowActivity: true,\n\
             \n    \
                 // NEW - Feed Privacy\n    \
                 privacyPublicProfile: true,\n    \
                 privacyShowLeaderboard: true,\n    \
                 privacyAllowMentions: true\n  \
               }\n\
             }",
        ),
        B::sub("Feed Posts (feedPosts/{postId})"),
        B::body("Post documents support the edit and delete actions:"),
        B::code(
            "feedPosts/{postId}: {\n  \
               authorId: \"uid\",          // Ownership check\n  \
               authorName: \"...\",\n  \
               bodyJson: {\n    \
                 format: \"plaintext\",\n    \
                 content: \"...\"          // Updated by Edit Post\n  \
               },\n  \
               type: \"status\",\n  \
               createdAt: Timestamp,\n  \
               updatedAt: Timestamp      // Set on edit\n\
             }\n\
             \n\
             // Delete removes the entire document via\n\
             // FeedService.deletePost(postId)",
        ),
    ]);
}

fn design_decisions(doc: &mut ReportDocument) {
    doc.extend([
        B::section("11. UI/UX Design Decisions"),
        B::sub("Why display:none Over opacity:0"),
        B::body(
            "The initial implementation used opacity:0 with pointer-events:none to hide the dropdown, \
             with a CSS transition for a smooth fade-in. However, testing revealed that in certain \
             caching scenarios, the child button elements remained visually rendered - appearing as \
             raw unstyled text next to the 3-dot button. Switching to display:none/display:block \
             completely removes elements from the render tree. The trade-off is losing the fade \
             animation, but reliability wins.",
        ),
        B::sub("Why Event Delegation for the Menu"),
        B::body(
            "The feed uses renderPosts() which replaces innerHTML of the posts container. \
             Directly-bound click handlers are destroyed on re-render. Event delegation on the \
             parent container (#feed-posts) survives re-renders, which is critical because \
             editing or deleting a post triggers renderPosts().",
        ),
        B::sub("Why Auto-Save for Settings"),
        B::body(
            "Feed settings use the same auto-save pattern as Notification Preferences. \
             When a user toggles a switch or changes a select, a 500ms debounced write sends \
             all 9 values to Firestore. This matches the existing UX, toggle switches imply \
             immediate effect, and it reduces friction for multi-setting adjustments.",
        ),
        B::sub("Contextual Menu Items"),
        B::body(
            "The dropdown adapts based on post ownership:\n\n\
             Your posts:    Edit Post | Delete Post | --- | Copy Link | Report Post\n\
             Others' posts: Copy Link | Report Post | Mute Author\n\n\
             Edit and Delete only appear on your own posts. Mute Author only appears on \
             others' posts. Copy Link and Report are universal. The divider separates \
             destructive actions from informational ones.",
        ),
    ]);
}

fn security(doc: &mut ReportDocument) {
    doc.extend([
        B::section("12. Security Considerations"),
        B::sub("Client-Side Ownership Check"),
        B::body(
            "The menu template uses post.authorId === this.currentUser?.uid to determine which items \
             to render. This is a UI convenience only - not a security boundary. True enforcement \
             must happen in Firestore Security Rules:",
        ),
        B::code(
            "match /feedPosts/{postId} {\n  \
               allow update, delete:\n    \
                 if request.auth.uid == resource.data.authorId;\n  \
               allow read:\n    \
                 if request.auth != null;\n  \
               allow create:\n    \
                 if request.auth != null\n    \
                 && request.resource.data.authorId == request.auth.uid;\n\
             }",
        ),
        B::sub("XSS Prevention in Edit Flow"),
        B::body(
            "When a user edits a post, the content is placed into a textarea element (which does not \
             render HTML) and saved as plaintext. The renderPostCard template uses escapeHtml() on \
             user-generated content to prevent script injection.",
        ),
        B::sub("Privacy Settings Are Advisory"),
        B::body(
            "The Feed Privacy toggles are currently client-side preferences stored in Firestore. \
             For them to be enforced, the feed query logic and leaderboard page must read these \
             settings and filter accordingly. This is a planned follow-up. Until enforced \
             server-side, these settings represent user intent but are not technically binding.",
        ),
    ]);
}

fn rollout(doc: &mut ReportDocument) {
    doc.extend([
        B::section("13. Rollout Checklist"),
        B::body("Items to complete before this feature is considered production-ready:"),
        B::Spacer(2.0),
    ]);
    doc.extend(checklist(&[
        ("Post 3-dot dropdown renders correctly (dark theme)", true),
        ("Post 3-dot dropdown renders correctly (light theme)", true),
        ("Edit Post modal opens, populates, and saves", true),
        ("Delete Post confirms and removes post", true),
        ("Copy Link copies URL to clipboard", true),
        ("Report Post shows feedback toast", true),
        ("Mute Author shows feedback toast", true),
        ("Dropdown closes on outside click", true),
        ("Event delegation survives post re-render", true),
        ("Feed Settings UI renders in Settings page", true),
        ("Feed Settings load from Firestore on page load", true),
        ("Feed Settings auto-save to Firestore on change", true),
        ("Settings/Feed sidebar links on all dashboard pages", true),
        ("Profile picture upload with instant preview", true),
        ("Profile picture saved to Firebase Storage + Auth + Firestore", true),
        ("Edit Profile links to Settings page", true),
        ("Bio/status always visible with auto-save", true),
        ("Feed mobile sidebar matches dashboard standard", true),
        ("Notes link added to challenges.html sidebar", true),
        ("Navbar audit PDF published to main", true),
        ("All feature code pushed to main", true),
        ("Feed page reads user settings on load", false),
        ("Firestore Security Rules enforce post ownership", false),
        ("Report/Mute persist to Firestore collections", false),
        ("Privacy settings enforced in feed queries", false),
        ("End-to-end testing with multiple user accounts", false),
    ]));
}
