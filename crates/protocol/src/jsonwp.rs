//! Legacy JSON Wire Protocol command table.
//!
//! Endpoints per the Selenium JSON Wire Protocol. Several commands exist
//! only here (element location/size, moveto, submit); a few share names
//! with the W3C table but differ in verb, path, or parameter shape.

use crate::descriptor::HttpVerb::{Delete, Get, Post};
use crate::descriptor::ParamKind::{Any, Array, Number, Object, String, StringArray};
use crate::descriptor::{CommandDescriptor, opt, req};

pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "newSession",
        verb: Post,
        path: "/session",
        params: &[req("desiredCapabilities", Object), opt("capabilities", Object)],
    },
    CommandDescriptor {
        name: "getSession",
        verb: Get,
        path: "/session/{sessionId}",
        params: &[],
    },
    CommandDescriptor {
        name: "deleteSession",
        verb: Delete,
        path: "/session/{sessionId}",
        params: &[],
    },
    CommandDescriptor {
        name: "getSessions",
        verb: Get,
        path: "/sessions",
        params: &[],
    },
    CommandDescriptor {
        name: "status",
        verb: Get,
        path: "/status",
        params: &[],
    },
    CommandDescriptor {
        name: "setTimeouts",
        verb: Post,
        path: "/session/{sessionId}/timeouts",
        params: &[req("type", String), req("ms", Number)],
    },
    CommandDescriptor {
        name: "setAsyncScriptTimeout",
        verb: Post,
        path: "/session/{sessionId}/timeouts/async_script",
        params: &[req("ms", Number)],
    },
    CommandDescriptor {
        name: "setImplicitWaitTimeout",
        verb: Post,
        path: "/session/{sessionId}/timeouts/implicit_wait",
        params: &[req("ms", Number)],
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
        path: "/session/{sessionId}/window_handle",
        params: &[],
    },
    CommandDescriptor {
        name: "getWindowHandles",
        verb: Get,
        path: "/session/{sessionId}/window_handles",
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
        params: &[req("name", String)],
    },
    CommandDescriptor {
        name: "getWindowSize",
        verb: Get,
        path: "/session/{sessionId}/window/{windowHandle}/size",
        params: &[],
    },
    CommandDescriptor {
        name: "setWindowSize",
        verb: Post,
        path: "/session/{sessionId}/window/{windowHandle}/size",
        params: &[req("width", Number), req("height", Number)],
    },
    CommandDescriptor {
        name: "getWindowPosition",
        verb: Get,
        path: "/session/{sessionId}/window/{windowHandle}/position",
        params: &[],
    },
    CommandDescriptor {
        name: "setWindowPosition",
        verb: Post,
        path: "/session/{sessionId}/window/{windowHandle}/position",
        params: &[req("x", Number), req("y", Number)],
    },
    CommandDescriptor {
        name: "maximizeWindow",
        verb: Post,
        path: "/session/{sessionId}/window/{windowHandle}/maximize",
        params: &[],
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
        name: "getPageSource",
        verb: Get,
        path: "/session/{sessionId}/source",
        params: &[],
    },
    CommandDescriptor {
        name: "executeScript",
        verb: Post,
        path: "/session/{sessionId}/execute",
        params: &[req("script", String), req("args", Array)],
    },
    CommandDescriptor {
        name: "executeAsyncScript",
        verb: Post,
        path: "/session/{sessionId}/execute_async",
        params: &[req("script", String), req("args", Array)],
    },
    CommandDescriptor {
        name: "takeScreenshot",
        verb: Get,
        path: "/session/{sessionId}/screenshot",
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
        verb: Post,
        path: "/session/{sessionId}/element/active",
        params: &[],
    },
    CommandDescriptor {
        name: "elementClick",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/click",
        params: &[],
    },
    CommandDescriptor {
        name: "elementSubmit",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/submit",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementText",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/text",
        params: &[],
    },
    CommandDescriptor {
        name: "elementSendKeys",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/value",
        params: &[req("value", StringArray)],
    },
    CommandDescriptor {
        name: "sendKeys",
        verb: Post,
        path: "/session/{sessionId}/keys",
        params: &[req("value", StringArray)],
    },
    CommandDescriptor {
        name: "getElementTagName",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/name",
        params: &[],
    },
    CommandDescriptor {
        name: "elementClear",
        verb: Post,
        path: "/session/{sessionId}/element/{elementId}/clear",
        params: &[],
    },
    CommandDescriptor {
        name: "isElementSelected",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/selected",
        params: &[],
    },
    CommandDescriptor {
        name: "isElementEnabled",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/enabled",
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
        name: "getElementCSSValue",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/css/{propertyName}",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementLocation",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/location",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementLocationInView",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/location_in_view",
        params: &[],
    },
    CommandDescriptor {
        name: "getElementSize",
        verb: Get,
        path: "/session/{sessionId}/element/{elementId}/size",
        params: &[],
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
        name: "deleteCookie",
        verb: Delete,
        path: "/session/{sessionId}/cookie/{name}",
        params: &[],
    },
    CommandDescriptor {
        name: "getAlertText",
        verb: Get,
        path: "/session/{sessionId}/alert_text",
        params: &[],
    },
    CommandDescriptor {
        name: "sendAlertText",
        verb: Post,
        path: "/session/{sessionId}/alert_text",
        params: &[req("text", String)],
    },
    CommandDescriptor {
        name: "acceptAlert",
        verb: Post,
        path: "/session/{sessionId}/accept_alert",
        params: &[],
    },
    CommandDescriptor {
        name: "dismissAlert",
        verb: Post,
        path: "/session/{sessionId}/dismiss_alert",
        params: &[],
    },
    CommandDescriptor {
        name: "moveTo",
        verb: Post,
        path: "/session/{sessionId}/moveto",
        params: &[
            opt("element", String),
            opt("xoffset", Number),
            opt("yoffset", Number),
        ],
    },
    CommandDescriptor {
        name: "buttonDown",
        verb: Post,
        path: "/session/{sessionId}/buttondown",
        params: &[opt("button", Number)],
    },
    CommandDescriptor {
        name: "buttonUp",
        verb: Post,
        path: "/session/{sessionId}/buttonup",
        params: &[opt("button", Number)],
    },
    CommandDescriptor {
        name: "buttonPress",
        verb: Post,
        path: "/session/{sessionId}/click",
        params: &[opt("button", Number)],
    },
    CommandDescriptor {
        name: "doubleClick",
        verb: Post,
        path: "/session/{sessionId}/doubleclick",
        params: &[],
    },
];
