mod support;

mod draggable_view_tests;
