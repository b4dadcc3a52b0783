//! Mobile JSON Wire Protocol command table.
//!
//! The hybrid mobile layer: context switching, touch gestures, device
//! orientation, geolocation. Layered onto either base dialect.

use crate::descriptor::HttpVerb::{Get, Post};
use crate::descriptor::ParamKind::{Number, Object, ObjectArray, String};
use crate::descriptor::{CommandDescriptor, opt, req};

pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "getContext",
        verb: Get,
        path: "/session/{sessionId}/context",
        params: &[],
    },
    CommandDescriptor {
        name: "getContexts",
        verb: Get,
        path: "/session/{sessionId}/contexts",
        params: &[],
    },
    CommandDescriptor {
        name: "switchContext",
        verb: Post,
        path: "/session/{sessionId}/context",
        params: &[req("name", String)],
    },
    CommandDescriptor {
        name: "getOrientation",
        verb: Get,
        path: "/session/{sessionId}/orientation",
        params: &[],
    },
    CommandDescriptor {
        name: "setOrientation",
        verb: Post,
        path: "/session/{sessionId}/orientation",
        params: &[req("orientation", String)],
    },
    CommandDescriptor {
        name: "performTouchAction",
        verb: Post,
        path: "/session/{sessionId}/touch/perform",
        params: &[req("actions", ObjectArray)],
    },
    CommandDescriptor {
        name: "performMultiAction",
        verb: Post,
        path: "/session/{sessionId}/touch/multi/perform",
        params: &[req("actions", ObjectArray), opt("elementId", String)],
    },
    CommandDescriptor {
        name: "touchDown",
        verb: Post,
        path: "/session/{sessionId}/touch/down",
        params: &[req("x", Number), req("y", Number)],
    },
    CommandDescriptor {
        name: "touchUp",
        verb: Post,
        path: "/session/{sessionId}/touch/up",
        params: &[req("x", Number), req("y", Number)],
    },
    CommandDescriptor {
        name: "touchMove",
        verb: Post,
        path: "/session/{sessionId}/touch/move",
        params: &[req("x", Number), req("y", Number)],
    },
    CommandDescriptor {
        name: "touchClick",
        verb: Post,
        path: "/session/{sessionId}/touch/click",
        params: &[req("element", String)],
    },
    CommandDescriptor {
        name: "touchLongClick",
        verb: Post,
        path: "/session/{sessionId}/touch/longclick",
        params: &[req("element", String)],
    },
    CommandDescriptor {
        name: "touchFlick",
        verb: Post,
        path: "/session/{sessionId}/touch/flick",
        params: &[
            opt("element", String),
            opt("xoffset", Number),
            opt("yoffset", Number),
            opt("speed", Number),
            opt("xspeed", Number),
            opt("yspeed", Number),
        ],
    },
    CommandDescriptor {
        name: "touchScroll",
        verb: Post,
        path: "/session/{sessionId}/touch/scroll",
        params: &[
            opt("element", String),
            opt("xoffset", Number),
            opt("yoffset", Number),
        ],
    },
    CommandDescriptor {
        name: "getGeoLocation",
        verb: Get,
        path: "/session/{sessionId}/location",
        params: &[],
    },
    CommandDescriptor {
        name: "setGeoLocation",
        verb: Post,
        path: "/session/{sessionId}/location",
        params: &[req("location", Object)],
    },
];
