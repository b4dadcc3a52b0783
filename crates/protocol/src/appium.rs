//! Appium vendor extension command table.
//!
//! Device- and app-management endpoints under the `/appium/` prefix.
//! Layered last, so vendor entries win name collisions.

use crate::descriptor::HttpVerb::{Get, Post};
use crate::descriptor::ParamKind::{Number, Object, String};
use crate::descriptor::{CommandDescriptor, opt, req};

pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "getDeviceTime",
        verb: Get,
        path: "/session/{sessionId}/appium/device/system_time",
        params: &[],
    },
    CommandDescriptor {
        name: "installApp",
        verb: Post,
        path: "/session/{sessionId}/appium/device/install_app",
        params: &[req("appPath", String)],
    },
    CommandDescriptor {
        name: "removeApp",
        verb: Post,
        path: "/session/{sessionId}/appium/device/remove_app",
        params: &[req("appId", String)],
    },
    CommandDescriptor {
        name: "isAppInstalled",
        verb: Post,
        path: "/session/{sessionId}/appium/device/app_installed",
        params: &[req("bundleId", String)],
    },
    CommandDescriptor {
        name: "launchApp",
        verb: Post,
        path: "/session/{sessionId}/appium/app/launch",
        params: &[],
    },
    CommandDescriptor {
        name: "closeApp",
        verb: Post,
        path: "/session/{sessionId}/appium/app/close",
        params: &[],
    },
    CommandDescriptor {
        name: "resetApp",
        verb: Post,
        path: "/session/{sessionId}/appium/app/reset",
        params: &[],
    },
    CommandDescriptor {
        name: "backgroundApp",
        verb: Post,
        path: "/session/{sessionId}/appium/app/background",
        params: &[req("seconds", Number)],
    },
    CommandDescriptor {
        name: "hideKeyboard",
        verb: Post,
        path: "/session/{sessionId}/appium/device/hide_keyboard",
        params: &[
            opt("strategy", String),
            opt("key", String),
            opt("keyCode", String),
            opt("keyName", String),
        ],
    },
    CommandDescriptor {
        name: "isKeyboardShown",
        verb: Get,
        path: "/session/{sessionId}/appium/device/is_keyboard_shown",
        params: &[],
    },
    CommandDescriptor {
        name: "lock",
        verb: Post,
        path: "/session/{sessionId}/appium/device/lock",
        params: &[opt("seconds", Number)],
    },
    CommandDescriptor {
        name: "isLocked",
        verb: Post,
        path: "/session/{sessionId}/appium/device/is_locked",
        params: &[],
    },
    CommandDescriptor {
        name: "unlock",
        verb: Post,
        path: "/session/{sessionId}/appium/device/unlock",
        params: &[],
    },
    CommandDescriptor {
        name: "shake",
        verb: Post,
        path: "/session/{sessionId}/appium/device/shake",
        params: &[],
    },
    CommandDescriptor {
        name: "openNotifications",
        verb: Post,
        path: "/session/{sessionId}/appium/device/open_notifications",
        params: &[],
    },
    CommandDescriptor {
        name: "pullFile",
        verb: Post,
        path: "/session/{sessionId}/appium/device/pull_file",
        params: &[req("path", String)],
    },
    CommandDescriptor {
        name: "pushFile",
        verb: Post,
        path: "/session/{sessionId}/appium/device/push_file",
        params: &[req("path", String), req("data", String)],
    },
    CommandDescriptor {
        name: "getCurrentActivity",
        verb: Get,
        path: "/session/{sessionId}/appium/device/current_activity",
        params: &[],
    },
    CommandDescriptor {
        name: "getCurrentPackage",
        verb: Get,
        path: "/session/{sessionId}/appium/device/current_package",
        params: &[],
    },
    CommandDescriptor {
        name: "startActivity",
        verb: Post,
        path: "/session/{sessionId}/appium/device/start_activity",
        params: &[
            req("appPackage", String),
            req("appActivity", String),
            opt("appWaitPackage", String),
            opt("appWaitActivity", String),
        ],
    },
    CommandDescriptor {
        name: "getSettings",
        verb: Get,
        path: "/session/{sessionId}/appium/settings",
        params: &[],
    },
    CommandDescriptor {
        name: "updateSettings",
        verb: Post,
        path: "/session/{sessionId}/appium/settings",
        params: &[req("settings", Object)],
    },
];
