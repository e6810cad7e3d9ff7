mod drag_to_close_tests;
