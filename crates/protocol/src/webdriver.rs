//! W3C WebDriver command table.
//!
//! Endpoints per the W3C WebDriver specification. Pure configuration:
//! one [`CommandDescriptor`] per remote end command.

use crate::descriptor::HttpVerb::{Delete, Get, Post};
use crate::descriptor::ParamKind::{Any, Array, Number, Object, ObjectArray, String};
use crate::descriptor::{CommandDescriptor, opt, req};

pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "newSession",
        verb: Post,
        path: "/session",
        params: &[req("capabilities", Object), opt("desiredCapabilities", Object)],
    },
    CommandDescriptor {
        name: "deleteSession",
        verb: Delete,
        path: "/session/{sessionId}",
        params: &[],
    },
    CommandDescriptor {
        name: "status",
        verb: Get,
        path: "/status",
        params: &[],
    },
    CommandDescriptor {
        name: "getTimeouts",
        verb: Get,
        path: "/session/{sessionId}/timeouts",
        params: &[],
    },
    CommandDescriptor {
        name: "setTimeouts",
        verb: Post,
        path: "/session/{sessionId}/timeouts",
        params: &[
            opt("implicit", Number),
            opt("pageLoad", Number),
            opt("script", Number),
        ],
    },
    CommandDescriptor {
        name: "getUrl",
        verb: Get,
        path: "/session/{sessionId}/url",
        params: &[],
    },
    CommandDescriptor {
        name: "navigateTo",
        verb: Post,
        path: "/session/{sessionId}/url",
        params: &[req("url", String)],
    },
    CommandDescriptor {
        name: "back",
        verb: Post,
        path: "/session/{sessionId}/back",
        params: &[],
    },
    CommandDescriptor {
        name: "forward",
        verb: Post,
        path: "/session/{sessionId}/forward",
        params: &[],
    },
    CommandDescriptor {
        name: "refresh",
        verb: Post,
        path: "/session/{sessionId}/refresh",
        params: &[],
    },
    CommandDescriptor {
        name: "getTitle",
        verb: Get,
        path: "/session/{sessionId}/title",
        params: &[],
    },
    CommandDescriptor {
        name: "getWindowHandle",
        verb: Get,
        path: "/session/{sessionId}/window",
        params: &[],
    },
    CommandDescriptor {
        name: "closeWindow",
        verb: Delete,
        path: "/session/{sessionId}/window",
        params: &[],
    },
    CommandDescriptor {
        name: "switchToWindow",
        verb: Post,
        path: "/session/{sessionId}/window",
        params: &[req("handle", String)],
    },
    CommandDescriptor {
        name: "getWindowHandles",
        verb: Get,
        path: "/session/{sessionId}/window/handles",
        params: &[],
    },
    CommandDescriptor {
        name: "createWindow",
        verb: Post,
        path: "/session/{sessionId}/window/new",
        params: &[req("type", String)],
    },
    CommandDescriptor {
        name: "switchToFrame",
        verb: Post,
        path: "/session/{sessionId}/frame",
        params: &[req("id", Any)],
    },
    CommandDescriptor {
        name: "switchToParentFrame",
        verb: Post,
        path: "/session/{sessionId}/frame/parent",
        params: &[],
    },
    CommandDescriptor {
        name: "getWindowRect",
        verb: Get,
        path: "/session/{sessionId}/window/rect",
        params: &[],
    },
    CommandDescriptor {
        name: "setWindowRect",
        verb: Post,
        path: "/session/{sessionId}/window/rect",
        params: &[
            opt("x", Number),
            opt("y", Number),
            opt("width", Number),
            opt("height", Number),
        ],
    },
    CommandDescriptor {
        name: "maximizeWindow",
        verb: Post,
        path: "/session/{sessionId}/window/maximize",
        params: &[],
    },
    CommandDescriptor {
        name: "minimizeWindow",
        verb: Post,
        path: "/session/{sessionId}/window/minimize",
        params: &[],
    },
    CommandDescriptor {
        name: "fullscreenWindow",
        verb: Post,
        path: "/session/{sessionId}/window/fullscreen",
        params: &[],
    },
    CommandDescriptor {
        name: "findElement",
        verb: Post,
        path: "/session/{sessionId}/element",
        params: &[req("using", String), req("value", String)],
    },
    CommandDescriptor {
        name: "findElements",
        verb: Post,
        path: "/session/{sessionId}/elements",
        params: &[req("using", String), req("value", String)],
    },
    CommandDescriptor {
        name: "findElementFromElement",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/element",
        params: &[req("using", String), req("value", String)],
    },
    CommandDescriptor {
        name: "findElementsFromElement",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/elements",
        params: &[req("using", String), req("value", String)],
    },
    CommandDescriptor {
        name: "getActiveElement",
        verb: Get,
        path: "/session/{sessionId}/element/active",
        params: &[],
    },
    CommandDescriptor {
        name: "isElementSelected",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/selected",
        params: &[],
    },
    CommandDescriptor {
        name: "isElementDisplayed",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/displayed",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementAttribute",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/attribute/{name}",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementProperty",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/property/{name}",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementCSSValue",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/css/{propertyName}",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementText",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/text",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementTagName",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/name",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementRect",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/rect",
        params: &[],
    },
    CommandDescriptor {
        name: "isElementEnabled",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/enabled",
        params: &[],
    },
    CommandDescriptor {
        name: "elementClick",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/click",
        params: &[],
    },
    CommandDescriptor {
        name: "elementClear",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/clear",
        params: &[],
    },
    CommandDescriptor {
        name: "elementSendKeys",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/value",
        params: &[req("text", String)],
    },
    CommandDescriptor {
        name: "getPageSource",
        verb: Get,
        path: "/session/{sessionId}/source",
        params: &[],
    },
    CommandDescriptor {
        name: "executeScript",
        verb: Post,
        path: "/session/{sessionId}/execute/sync",
        params: &[req("script", String), req("args", Array)],
    },
    CommandDescriptor {
        name: "executeAsyncScript",
        verb: Post,
        path: "/session/{sessionId}/execute/async",
        params: &[req("script", String), req("args", Array)],
    },
    CommandDescriptor {
        name: "getAllCookies",
        verb: Get,
        path: "/session/{sessionId}/cookie",
        params: &[],
    },
    CommandDescriptor {
        name: "addCookie",
        verb: Post,
        path: "/session/{sessionId}/cookie",
        params: &[req("cookie", Object)],
    },
    CommandDescriptor {
        name: "deleteAllCookies",
        verb: Delete,
        path: "/session/{sessionId}/cookie",
        params: &[],
    },
    CommandDescriptor {
        name: "getNamedCookie",
        verb: Get,
        path: "/session/{sessionId}/cookie/{name}",
        params: &[],
    },
    CommandDescriptor {
        name: "deleteCookie",
        verb: Delete,
        path: "/session/{sessionId}/cookie/{name}",
        params: &[],
    },
    CommandDescriptor {
        name: "performActions",
        verb: Post,
        path: "/session/{sessionId}/actions",
        params: &[req("actions", ObjectArray)],
    },
    CommandDescriptor {
        name: "releaseActions",
        verb: Delete,
        path: "/session/{sessionId}/actions",
        params: &[],
    },
    CommandDescriptor {
        name: "dismissAlert",
        verb: Post,
        path: "/session/{sessionId}/alert/dismiss",
        params: &[],
    },
    CommandDescriptor {
        name: "acceptAlert",
        verb: Post,
        path: "/session/{sessionId}/alert/accept",
        params: &[],
    },
    CommandDescriptor {
        name: "getAlertText",
        verb: Get,
        path: "/session/{sessionId}/alert/text",
        params: &[],
    },
    CommandDescriptor {
        name: "sendAlertText",
        verb: Post,
        path: "/session/{sessionId}/alert/text",
        params: &[req("text", String)],
    },
    CommandDescriptor {
        name: "takeScreenshot",
        verb: Get,
        path: "/session/{sessionId}/screenshot",
        params: &[],
    },
    CommandDescriptor {
        name: "takeElementScreenshot",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/screenshot",
        params: &[],
    },
];
